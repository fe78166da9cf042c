use crate::library::error::LibraryError;
use crate::library::models::{Book, BookId, BorrowReceipt, Stats};

pub(crate) mod client;
pub use client::LibraryClient;
pub mod error;
pub mod models;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait LibraryApi: Send + Sync {
    /// Fetch the aggregate counters.
    async fn get_stats(&self) -> Result<Stats, LibraryError>;

    /// Fetch the whole catalog. A `null` body is an empty catalog.
    async fn get_books(&self) -> Result<Vec<Book>, LibraryError>;

    /// Lend a book out.
    async fn borrow_book(&self, book_id: &BookId) -> Result<BorrowReceipt, LibraryError>;

    /// Bring a lent book back.
    async fn return_book(&self, book_id: &BookId) -> Result<(), LibraryError>;
}
