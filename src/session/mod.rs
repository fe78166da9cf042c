//! Session management for the interactive dashboard and one-shot commands

pub mod headless_mode;
pub mod messages;
pub mod setup;
pub mod tui_mode;

pub use headless_mode::{HeadlessCommand, run_headless_command};
pub use setup::{SessionData, setup_session};
pub use tui_mode::run_tui_mode;
