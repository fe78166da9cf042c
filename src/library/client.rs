//! Library API Client
//!
//! A JSON-over-HTTP client for the library backend's stats, catalog and circulation endpoints.

use crate::consts::cli_consts::api;
use crate::library::LibraryApi;
use crate::library::error::LibraryError;
use crate::library::models::{Book, BookId, BorrowReceipt, CirculationRequest, Stats};
use log::debug;
use reqwest::{Client, ClientBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// Build timestamp in milliseconds since epoch
const BUILD_TIMESTAMP: &str = env!("BUILD_TIMESTAMP", "Build timestamp not available");

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("library-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct LibraryClient {
    client: Client,
    base_url: String,
}

impl LibraryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LibraryError> {
        let client = ClientBuilder::new()
            .connect_timeout(api::connect_timeout())
            .timeout(api::request_timeout())
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, LibraryError> {
        serde_json::from_slice(bytes).map_err(LibraryError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, LibraryError> {
        if !response.status().is_success() {
            return Err(LibraryError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, LibraryError> {
        let url = self.build_url(endpoint);
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    async fn post_request<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, LibraryError> {
        let response = self.send_post(endpoint, body).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }

    /// POST whose response body is ignored; only the status matters.
    async fn post_request_no_response<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<(), LibraryError> {
        self.send_post(endpoint, body).await?;
        Ok(())
    }

    async fn send_post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Response, LibraryError> {
        let url = self.build_url(endpoint);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .header("Accept", "application/json")
            .header("User-Agent", USER_AGENT)
            .header("X-Build-Timestamp", BUILD_TIMESTAMP)
            .json(body)
            .send()
            .await?;

        Self::handle_response_status(response).await
    }
}

#[async_trait::async_trait]
impl LibraryApi for LibraryClient {
    async fn get_stats(&self) -> Result<Stats, LibraryError> {
        self.get_request("stats/").await
    }

    async fn get_books(&self) -> Result<Vec<Book>, LibraryError> {
        let books: Option<Vec<Book>> = self.get_request("books/").await?;
        Ok(books.unwrap_or_default())
    }

    async fn borrow_book(&self, book_id: &BookId) -> Result<BorrowReceipt, LibraryError> {
        let request = CirculationRequest { book_id };
        self.post_request("borrow/", &request).await
    }

    async fn return_book(&self, book_id: &BookId) -> Result<(), LibraryError> {
        let request = CirculationRequest { book_id };
        self.post_request_no_response("return/", &request).await
    }
}

#[cfg(test)]
/// These are ignored by default since they require a live library backend to run.
mod live_backend_tests {
    use crate::consts::cli_consts::api;
    use crate::library::LibraryApi;

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    /// Should fetch the counters from the default backend.
    async fn test_get_stats() {
        let client = super::LibraryClient::new(api::DEFAULT_BASE_URL).unwrap();
        match client.get_stats().await {
            Ok(stats) => println!("Stats: {:?}", stats),
            Err(e) => panic!("Failed to get stats: {}", e),
        }
    }

    #[tokio::test]
    #[ignore] // This test requires a live backend instance.
    /// Should fetch the catalog from the default backend.
    async fn test_get_books() {
        let client = super::LibraryClient::new(api::DEFAULT_BASE_URL).unwrap();
        match client.get_books().await {
            Ok(books) => println!("Got {} books", books.len()),
            Err(e) => panic!("Failed to get books: {}", e),
        }
    }
}
