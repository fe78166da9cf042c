//! Modal alert
//!
//! Drawn over the dashboard until the user dismisses it

use super::super::state::DashboardState;
use super::super::utils::centered_rect;
use crate::controller::AlertKind;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_alert(f: &mut Frame, state: &DashboardState) {
    let Some(alert) = state.alert() else {
        return;
    };

    let (title, color) = match alert.kind {
        AlertKind::Info => ("NOTICE", Color::LightGreen),
        AlertKind::Error => ("ERROR", Color::LightRed),
    };

    let area = centered_rect(60, 25, f.area());
    let body = Paragraph::new(vec![
        Line::from(alert.message.clone()),
        Line::from(""),
        Line::from("[Enter] OK").style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .padding(Padding::uniform(1)),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}
