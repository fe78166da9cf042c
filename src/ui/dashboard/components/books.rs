//! Dashboard book table component
//!
//! Renders the catalog rows, or the single placeholder row when there are none

use super::super::state::{DashboardState, InputMode, Placeholder};
use crate::controller::BookAction;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState,
};

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(34),
    Constraint::Percentage(24),
    Constraint::Percentage(18),
    Constraint::Percentage(12),
    Constraint::Percentage(12),
];

pub fn render_books_panel(f: &mut Frame, area: Rect, state: &DashboardState) {
    let title = match (state.input_mode(), state.filter_term()) {
        (InputMode::Search, term) => format!("BOOKS - search: {}_", term),
        (InputMode::Normal, "") => "BOOKS".to_string(),
        (InputMode::Normal, term) => format!("BOOKS - filter: {}", term),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if let Some(placeholder) = state.placeholder() {
        render_placeholder(f, area, block, placeholder);
        return;
    }

    let header = Row::new(["Title", "Author", "ISBN", "Status", "Action"])
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = state
        .visible_books()
        .map(|book| {
            let (status_color, action_color) = match book.action() {
                BookAction::Borrow => (Color::LightGreen, Color::Cyan),
                BookAction::Return => (Color::LightYellow, Color::Magenta),
            };
            Row::new(vec![
                Cell::from(book.title.clone()),
                Cell::from(book.author.clone()),
                Cell::from(book.isbn.clone()),
                Cell::from(Span::styled(
                    book.status_label(),
                    Style::default().fg(status_color),
                )),
                Cell::from(Span::styled(
                    format!("[{}]", book.action()),
                    Style::default()
                        .fg(action_color)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
        })
        .collect();

    let has_rows = !rows.is_empty();
    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 48, 56))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    if has_rows {
        table_state.select(Some(state.selected_index()));
    }
    f.render_stateful_widget(table, area, &mut table_state);
}

fn render_placeholder(f: &mut Frame, area: Rect, block: Block, placeholder: Placeholder) {
    let (icon, color) = match placeholder {
        Placeholder::Loading => ("...", Color::LightBlue),
        Placeholder::Empty => ("", Color::Gray),
        Placeholder::Error => ("(!)", Color::LightRed),
    };
    let line = Line::from(vec![
        Span::styled(format!("{} ", icon), Style::default().fg(color)),
        Span::styled(placeholder.message(), Style::default().fg(color)),
    ]);
    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}
