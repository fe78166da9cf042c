//! Dashboard stats strip
//!
//! Four counter cards: total, available, borrowed, overdue

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats_section(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let stats = state.stats();
    let cards = [
        ("TOTAL BOOKS", &stats.total, Color::Cyan),
        ("AVAILABLE", &stats.available, Color::LightGreen),
        ("BORROWED", &stats.borrowed, Color::LightYellow),
        ("OVERDUE", &stats.overdue, Color::LightRed),
    ];

    for ((title, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        render_counter(f, *chunk, title, value, color);
    }
}

fn render_counter(f: &mut Frame, area: Rect, title: &str, value: &str, color: Color) {
    let card = Paragraph::new(value.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(card, area);
}
