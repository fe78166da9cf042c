//! Error handling for the library API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    /// Transport failure: connection refused, timeout, TLS, and so on.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not the JSON we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LibraryError {
    pub async fn from_response(response: reqwest::Response) -> LibraryError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        LibraryError::Http { status, message }
    }
}
