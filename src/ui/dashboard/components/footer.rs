//! Dashboard footer component
//!
//! Key hints for the current input mode

use super::super::state::{DashboardState, InputMode};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let footer_text = if state.alert().is_some() {
        "[Enter] Dismiss"
    } else {
        match state.input_mode() {
            InputMode::Search => "Type to filter | [Enter] Keep filter | [Esc] Clear filter",
            InputMode::Normal => {
                "[Q] Quit | [R] Refresh | [/] Search | [↑↓] Select | [Enter] Borrow/Return"
            }
        }
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
