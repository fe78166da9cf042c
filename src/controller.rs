//! Dashboard controller
//!
//! Owns the API client and pushes [`DashboardUpdate`]s to whoever renders the dashboard.
//! Every operation reports through the update channel; nothing here touches the view directly.

use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType};
use crate::library::LibraryApi;
use crate::library::error::LibraryError;
use crate::library::models::{Book, BookId, BorrowReceipt, Stats};
use crate::logging::LogLevel;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Severity of a blocking alert.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlertKind {
    Info,
    Error,
}

/// A message the user has to acknowledge.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            message: message.into(),
        }
    }
}

/// The circulation action offered for a book.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum BookAction {
    Borrow,
    Return,
}

impl BookAction {
    /// Borrow if the book is on the shelf, otherwise Return.
    pub fn for_availability(available: bool) -> Self {
        if available {
            BookAction::Borrow
        } else {
            BookAction::Return
        }
    }
}

/// A change to apply to the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardUpdate {
    /// A load cycle began; the table shows its loading placeholder.
    LoadStarted,
    /// `stats/` succeeded.
    StatsLoaded(Stats),
    /// `books/` succeeded.
    BooksLoaded(Vec<Book>),
    /// At least one fetch of the load cycle failed.
    LoadFailed(String),
    /// Show a blocking alert.
    Alert(Alert),
    /// Append to the activity log.
    Log(Event),
}

/// Sending half of the update channel
#[derive(Clone)]
pub struct UpdateSender {
    sender: mpsc::Sender<DashboardUpdate>,
}

impl UpdateSender {
    pub fn new(sender: mpsc::Sender<DashboardUpdate>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, update: DashboardUpdate) {
        let _ = self.sender.send(update).await;
    }

    pub async fn send_event(&self, event: Event) {
        self.send(DashboardUpdate::Log(event)).await;
    }
}

#[derive(Clone)]
pub struct DashboardController {
    api: Arc<dyn LibraryApi>,
    updates: UpdateSender,
    classifier: ErrorClassifier,
}

impl DashboardController {
    pub fn new(api: Arc<dyn LibraryApi>, updates: UpdateSender) -> Self {
        Self {
            api,
            updates,
            classifier: ErrorClassifier::new(),
        }
    }

    /// Runs one load cycle: stats and books are fetched concurrently and each one
    /// updates its own region as soon as it succeeds. If either fails, the table
    /// ends the cycle in its error state; the stats region keeps whatever it showed.
    ///
    /// Returns the first error of the cycle, stats before books.
    pub async fn load_all(&self) -> Result<(), LibraryError> {
        self.updates.send(DashboardUpdate::LoadStarted).await;

        let (stats, books) = tokio::join!(self.load_stats(), self.load_books());

        let failure = match (stats, books) {
            (Ok(_), Ok(_)) => return Ok(()),
            (Err(e), _) | (_, Err(e)) => e,
        };
        self.updates
            .send(DashboardUpdate::LoadFailed(failure.to_string()))
            .await;
        Err(failure)
    }

    /// Fetches `stats/` and renders the counters on success.
    pub async fn load_stats(&self) -> Result<Stats, LibraryError> {
        match self.api.get_stats().await {
            Ok(stats) => {
                self.updates
                    .send(DashboardUpdate::StatsLoaded(stats.clone()))
                    .await;
                self.updates
                    .send_event(Event::stats_with_level(
                        "Statistics refreshed".to_string(),
                        EventType::Refresh,
                        LogLevel::Debug,
                    ))
                    .await;
                Ok(stats)
            }
            Err(e) => {
                self.updates
                    .send_event(Event::stats_with_level(
                        format!("Error fetching stats: {}", e),
                        EventType::Error,
                        self.classifier.classify(&e),
                    ))
                    .await;
                Err(e)
            }
        }
    }

    /// Fetches `books/` and renders the table on success.
    pub async fn load_books(&self) -> Result<Vec<Book>, LibraryError> {
        match self.api.get_books().await {
            Ok(books) => {
                let count = books.len();
                self.updates
                    .send(DashboardUpdate::BooksLoaded(books.clone()))
                    .await;
                self.updates
                    .send_event(Event::books_with_level(
                        format!("Loaded {} books", count),
                        EventType::Success,
                        LogLevel::Info,
                    ))
                    .await;
                Ok(books)
            }
            Err(e) => {
                self.updates
                    .send_event(Event::books_with_level(
                        format!("Error fetching books: {}", e),
                        EventType::Error,
                        self.classifier.classify(&e),
                    ))
                    .await;
                Err(e)
            }
        }
    }

    /// Borrows a book, confirms with its due date, then reloads everything.
    ///
    /// On failure an error alert is raised and nothing is reloaded.
    pub async fn borrow(&self, book_id: &BookId) -> Result<BorrowReceipt, LibraryError> {
        match self.api.borrow_book(book_id).await {
            Ok(receipt) => {
                let due_date = receipt.due_date.as_deref().unwrap_or("unknown");
                self.updates
                    .send_event(Event::circulation_with_level(
                        format!("Borrowed book {} (due {})", book_id, due_date),
                        EventType::Success,
                        LogLevel::Info,
                    ))
                    .await;
                self.updates
                    .send(DashboardUpdate::Alert(Alert::info(format!(
                        "Book borrowed successfully. Due date: {}",
                        due_date
                    ))))
                    .await;
                // Reload failures are already shown in the table.
                let _ = self.load_all().await;
                Ok(receipt)
            }
            Err(e) => {
                self.report_circulation_failure("borrow", book_id, &e).await;
                Err(e)
            }
        }
    }

    /// Returns a book, confirms, then reloads everything.
    ///
    /// On failure an error alert is raised and nothing is reloaded.
    pub async fn return_book(&self, book_id: &BookId) -> Result<(), LibraryError> {
        match self.api.return_book(book_id).await {
            Ok(()) => {
                self.updates
                    .send_event(Event::circulation_with_level(
                        format!("Returned book {}", book_id),
                        EventType::Success,
                        LogLevel::Info,
                    ))
                    .await;
                self.updates
                    .send(DashboardUpdate::Alert(Alert::info(
                        "Book returned successfully",
                    )))
                    .await;
                let _ = self.load_all().await;
                Ok(())
            }
            Err(e) => {
                self.report_circulation_failure("return", book_id, &e).await;
                Err(e)
            }
        }
    }

    /// Dispatches a row action to [`Self::borrow`] or [`Self::return_book`].
    pub async fn run_action(&self, action: BookAction, book_id: &BookId) -> Result<(), LibraryError> {
        match action {
            BookAction::Borrow => self.borrow(book_id).await.map(|_| ()),
            BookAction::Return => self.return_book(book_id).await,
        }
    }

    /// Starts a load cycle in the background.
    pub fn spawn_load_all(&self) {
        let controller = self.clone();
        tokio::spawn(async move {
            let _ = controller.load_all().await;
        });
    }

    /// Starts a borrow or return in the background.
    pub fn spawn_action(&self, action: BookAction, book_id: BookId) {
        let controller = self.clone();
        tokio::spawn(async move {
            let _ = controller.run_action(action, &book_id).await;
        });
    }

    async fn report_circulation_failure(&self, verb: &str, book_id: &BookId, error: &LibraryError) {
        self.updates
            .send_event(Event::circulation_with_level(
                format!("Failed to {} book {}: {}", verb, book_id, error),
                EventType::Error,
                self.classifier.classify(error),
            ))
            .await;
        self.updates
            .send(DashboardUpdate::Alert(Alert::error(format!(
                "Failed to {} book: {}",
                verb, error
            ))))
            .await;
    }
}
