//! Headless mode execution
//!
//! One-shot commands that run a single controller operation and print the resulting view.

use super::SessionData;
use crate::controller::{AlertKind, DashboardUpdate};
use crate::library::error::LibraryError;
use crate::library::models::BookId;
use crate::ui::dashboard::DashboardState;
use crate::ui::dashboard::state::{Placeholder, TableRow};
use crate::{print_cmd_error, print_cmd_success, print_cmd_warn};
use std::error::Error;

/// A single operation to run without the interactive dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Stats,
    Books { search: Option<String> },
    Borrow(BookId),
    Return(BookId),
}

/// What a finished command leaves on screen besides its events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Text(String),
    ReloadFailed,
}

/// Runs one command, prints its events and the resulting view.
///
/// # Returns
/// * `Ok(())` - The operation succeeded
/// * `Err` - The operation failed; its events have already been printed
pub async fn run_headless_command(
    mut session: SessionData,
    command: HeadlessCommand,
) -> Result<(), Box<dyn Error>> {
    let (view, updates, result) = execute(&mut session, &command).await;
    for update in &updates {
        print_update(update);
    }
    result?;

    match report(&command, view) {
        Report::Text(text) => print!("{}", text),
        Report::ReloadFailed => {
            print_cmd_warn!("Reload failed", "the catalog could not be refreshed")
        }
    }
    Ok(())
}

/// Runs the controller operation and replays its updates into a fresh view.
async fn execute(
    session: &mut SessionData,
    command: &HeadlessCommand,
) -> (DashboardState, Vec<DashboardUpdate>, Result<(), LibraryError>) {
    let controller = session.controller.clone();
    let result = match command {
        HeadlessCommand::Stats => controller.load_stats().await.map(|_| ()),
        HeadlessCommand::Books { .. } => controller.load_books().await.map(|_| ()),
        HeadlessCommand::Borrow(book_id) => controller.borrow(book_id).await.map(|_| ()),
        HeadlessCommand::Return(book_id) => controller.return_book(book_id).await,
    };

    // The operation has finished, so every update it produced is already queued.
    let mut view = DashboardState::new(session.api_url.clone(), false);
    let mut updates = Vec::new();
    while let Ok(update) = session.update_receiver.try_recv() {
        view.process_update(update.clone());
        updates.push(update);
    }
    (view, updates, result)
}

fn report(command: &HeadlessCommand, mut view: DashboardState) -> Report {
    match command {
        HeadlessCommand::Stats => Report::Text(format_stats(&view)),
        HeadlessCommand::Books { search } => {
            if let Some(term) = search {
                view.filter(term);
            }
            Report::Text(format_books(&view))
        }
        HeadlessCommand::Borrow(_) | HeadlessCommand::Return(_) => {
            if view.placeholder() == Some(Placeholder::Error) {
                Report::ReloadFailed
            } else {
                Report::Text(format_stats(&view))
            }
        }
    }
}

fn print_update(update: &DashboardUpdate) {
    match update {
        DashboardUpdate::Log(event) if event.should_display() => println!("{}", event),
        DashboardUpdate::Alert(alert) => match alert.kind {
            AlertKind::Info => print_cmd_success!(&alert.message, ""),
            AlertKind::Error => print_cmd_error!(&alert.message),
        },
        _ => {}
    }
}

/// The stats strip as aligned text.
pub fn format_stats(view: &DashboardState) -> String {
    let stats = view.stats();
    format!(
        "Total books:     {}\nAvailable books: {}\nBorrowed books:  {}\nOverdue books:   {}\n",
        stats.total, stats.available, stats.borrowed, stats.overdue
    )
}

/// The book table as aligned text, honouring the current filter.
pub fn format_books(view: &DashboardState) -> String {
    if let [TableRow::Placeholder(placeholder)] = view.rows() {
        return format!("{}\n", placeholder.message());
    }

    let header = ["Title", "Author", "ISBN", "Status", "Action"];
    let rows: Vec<[String; 5]> = view
        .visible_books()
        .map(|book| {
            [
                book.title.clone(),
                book.author.clone(),
                book.isbn.clone(),
                book.status_label().to_string(),
                book.action().to_string(),
            ]
        })
        .collect();

    if rows.is_empty() {
        return format!("No books match \"{}\"\n", view.filter_term());
    }

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };
    push_line(&header[..]);
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        push_line(&cells[..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::UPDATE_QUEUE_SIZE;
    use crate::controller::{DashboardController, UpdateSender};
    use crate::library::MockLibraryApi;
    use crate::library::models::{Book, BorrowReceipt, Stats};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn session_with(api: MockLibraryApi) -> SessionData {
        let (sender, update_receiver) = mpsc::channel(UPDATE_QUEUE_SIZE);
        SessionData {
            controller: DashboardController::new(Arc::new(api), UpdateSender::new(sender)),
            update_receiver,
            api_url: "http://library.test/api/".to_string(),
        }
    }

    fn server_error() -> LibraryError {
        LibraryError::Http {
            status: 500,
            message: "boom".to_string(),
        }
    }

    fn alert_messages(updates: &[DashboardUpdate]) -> Vec<String> {
        updates
            .iter()
            .filter_map(|u| match u {
                DashboardUpdate::Alert(alert) => Some(alert.message.clone()),
                _ => None,
            })
            .collect()
    }

    fn view_with(books: &[Book]) -> DashboardState {
        let mut view = DashboardState::new(String::new(), false);
        view.render_books(books);
        view
    }

    fn book(id: u64, title: &str, available: bool) -> Book {
        Book {
            id: BookId::Number(id),
            title: Some(title.to_string()),
            author: Some("Someone".to_string()),
            isbn: Some("123".to_string()),
            available: Some(available),
        }
    }

    #[test]
    fn test_format_stats_lists_all_counters() {
        let mut view = DashboardState::new(String::new(), false);
        view.render_stats(&Stats::new(10, 7, 3, 0));
        let text = format_stats(&view);
        assert!(text.contains("Total books:     10"));
        assert!(text.contains("Overdue books:   0"));
    }

    #[test]
    fn test_format_books_aligns_columns() {
        let view = view_with(&[book(1, "Dune", true), book(2, "Neuromancer", false)]);
        let text = format_books(&view);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Title        Author"));
        assert!(lines[1].starts_with("Dune         Someone"));
        assert!(lines[1].ends_with("Available  Borrow"));
        assert!(lines[2].ends_with("Borrowed   Return"));
    }

    #[test]
    fn test_format_books_placeholder_and_no_match() {
        assert_eq!(
            format_books(&view_with(&[])),
            "No books found in the library\n"
        );

        let mut view = view_with(&[book(1, "Dune", true)]);
        view.filter("xyz");
        assert_eq!(format_books(&view), "No books match \"xyz\"\n");
    }

    #[tokio::test]
    async fn test_borrow_confirms_then_reports_reloaded_stats() {
        let mut api = MockLibraryApi::new();
        api.expect_borrow_book()
            .withf(|id| *id == BookId::Number(1))
            .returning(|_| {
                Ok(BorrowReceipt {
                    due_date: Some("2024-01-01".to_string()),
                })
            });
        api.expect_get_stats()
            .returning(|| Ok(Stats::new(10, 6, 4, 0)));
        api.expect_get_books()
            .returning(|| Ok(vec![book(1, "Dune", false)]));

        let command = HeadlessCommand::Borrow(BookId::Number(1));
        let mut session = session_with(api);
        let (view, updates, result) = execute(&mut session, &command).await;

        assert!(result.is_ok());
        assert_eq!(
            alert_messages(&updates),
            vec!["Book borrowed successfully. Due date: 2024-01-01".to_string()]
        );
        match report(&command, view) {
            Report::Text(text) => assert!(text.contains("Borrowed books:  4")),
            other => panic!("unexpected report {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_borrow_with_failed_reload_reports_reload_failure() {
        let mut api = MockLibraryApi::new();
        api.expect_borrow_book()
            .returning(|_| Ok(BorrowReceipt::default()));
        api.expect_get_stats()
            .returning(|| Ok(Stats::new(10, 6, 4, 0)));
        api.expect_get_books().returning(|| Err(server_error()));

        let command = HeadlessCommand::Borrow(BookId::Number(1));
        let mut session = session_with(api);
        let (view, updates, result) = execute(&mut session, &command).await;

        assert!(result.is_ok());
        assert_eq!(
            alert_messages(&updates),
            vec!["Book borrowed successfully. Due date: unknown".to_string()]
        );
        assert_eq!(report(&command, view), Report::ReloadFailed);
    }

    #[tokio::test]
    async fn test_failed_return_is_an_error_without_reload() {
        let mut api = MockLibraryApi::new();
        api.expect_return_book().returning(|_| Err(server_error()));
        api.expect_get_stats().never();
        api.expect_get_books().never();

        let command = HeadlessCommand::Return(BookId::Text("b-1".to_string()));
        let mut session = session_with(api);
        let (_, updates, result) = execute(&mut session, &command).await;

        assert!(result.is_err());
        assert_eq!(alert_messages(&updates).len(), 1);
        assert!(alert_messages(&updates)[0].starts_with("Failed to return book:"));
    }

    #[tokio::test]
    async fn test_books_search_filters_printed_table() {
        let mut api = MockLibraryApi::new();
        api.expect_get_books().returning(|| {
            Ok(vec![
                book(1, "Dune", true),
                book(2, "Neuromancer", false),
            ])
        });

        let command = HeadlessCommand::Books {
            search: Some("NEURO".to_string()),
        };
        let mut session = session_with(api);
        let (view, _, result) = execute(&mut session, &command).await;

        assert!(result.is_ok());
        match report(&command, view) {
            Report::Text(text) => {
                assert_eq!(text.lines().count(), 2);
                assert!(text.contains("Neuromancer"));
                assert!(!text.contains("Dune"));
            }
            other => panic!("unexpected report {:?}", other),
        }
    }
}
