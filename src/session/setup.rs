//! Session setup and initialization

use crate::consts::cli_consts::UPDATE_QUEUE_SIZE;
use crate::controller::{DashboardController, DashboardUpdate, UpdateSender};
use crate::library::LibraryClient;
use std::error::Error;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Controller wired to the library backend
    pub controller: DashboardController,
    /// Receives the controller's view updates
    pub update_receiver: mpsc::Receiver<DashboardUpdate>,
    /// Base URL of the library backend
    pub api_url: String,
}

/// Builds the API client and the controller that reports into a fresh update channel.
///
/// # Returns
/// * `Ok(SessionData)` - Successfully set up session
/// * `Err` - The HTTP client could not be created
pub fn setup_session(api_url: String) -> Result<SessionData, Box<dyn Error>> {
    let client = LibraryClient::new(api_url)?;
    let api_url = client.base_url().to_string();

    let (sender, update_receiver) = mpsc::channel(UPDATE_QUEUE_SIZE);
    let controller = DashboardController::new(Arc::new(client), UpdateSender::new(sender));

    Ok(SessionData {
        controller,
        update_receiver,
        api_url,
    })
}
