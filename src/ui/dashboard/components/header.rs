//! Dashboard header component
//!
//! Renders the title, today's date and the state of the book table

use super::super::state::{DashboardState, Placeholder};

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

/// Today's date in long form, e.g. "Monday, January 1, 2024".
pub fn today_long_date() -> String {
    Local::now().format("%A, %B %-d, %Y").to_string()
}

/// Render header with title and table status.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let title_text = format!(
        "LIBRARY DASHBOARD v{}  |  {}",
        env!("CARGO_PKG_VERSION"),
        today_long_date()
    );
    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let (status_text, gauge_color, percent) = match state.placeholder() {
        Some(Placeholder::Loading) => {
            // Sweeps every 20 ticks while the load cycle is in flight
            let progress = ((state.tick % 20) as f64 / 20.0 * 100.0) as u16;
            (
                format!("LOADING - {}", state.api_url),
                Color::LightBlue,
                progress,
            )
        }
        Some(Placeholder::Error) => (
            "ERROR - Failed to load data, press R to retry".to_string(),
            Color::LightRed,
            100,
        ),
        _ => {
            let shown = state.visible_books().count();
            let total = state.book_count();
            let refreshed = state
                .last_refreshed()
                .map(|t| format!(", refreshed {}", t))
                .unwrap_or_default();
            (
                format!("READY - {} of {} books shown{}", shown, total, refreshed),
                Color::LightGreen,
                100,
            )
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .percent(percent)
        .label(status_text);

    f.render_widget(gauge, header_chunks[1]);
}
