//! Dashboard main renderer

use super::components::{alert, books, footer, header, logs, stats};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    stats::render_stats_section(f, main_chunks[1], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
        .split(main_chunks[2]);

    books::render_books_panel(f, content_chunks[0], state);
    logs::render_logs_panel(f, content_chunks[1], state);
    footer::render_footer(f, main_chunks[3], state);

    // Drawn last so it sits on top
    alert::render_alert(f, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Alert;
    use crate::library::models::{Book, BookId, Stats};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &DashboardState) -> String {
        let backend = TestBackend::new(160, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_counters_rows_and_actions() {
        let mut state = DashboardState::new("http://localhost:8000/api/".to_string(), true);
        state.render_stats(&Stats::new(10, 7, 3, 0));
        state.render_books(&[
            Book {
                id: BookId::Number(1),
                title: Some("Dune".to_string()),
                author: Some("Frank Herbert".to_string()),
                isbn: Some("9780441013593".to_string()),
                available: Some(true),
            },
            Book {
                id: BookId::Number(2),
                title: Some("Emma".to_string()),
                author: None,
                isbn: None,
                available: Some(false),
            },
        ]);

        let screen = draw(&state);
        assert!(screen.contains("TOTAL BOOKS"));
        assert!(screen.contains("Dune"));
        assert!(screen.contains("[Borrow]"));
        assert!(screen.contains("[Return]"));
        assert!(screen.contains("Unknown"));
    }

    #[test]
    fn test_draws_error_placeholder_and_alert() {
        let mut state = DashboardState::new(String::new(), false);
        state.show_error();
        state.show_alert(Alert::error("Failed to borrow book: boom"));

        let screen = draw(&state);
        assert!(screen.contains("Failed to load data. Please try again."));
        assert!(screen.contains("Failed to borrow book: boom"));
    }
}
