mod cli_messages;
mod config;
mod consts;
mod controller;
mod error_classifier;
mod events;
mod library;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_config_path, resolve_api_url};
use crate::consts::cli_consts::api;
use crate::library::models::BookId;
use crate::session::{HeadlessCommand, run_headless_command, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the library API. Overrides the saved configuration.
    #[arg(long, global = true, value_name = "URL", env = api::BASE_URL_ENV)]
    api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Start {
        /// Enable background colors
        #[arg(long, default_value = "false")]
        with_background: bool,
    },
    /// Print the catalog statistics
    Stats,
    /// Print the book list
    Books {
        /// Only show books whose title, author or ISBN contains this text
        #[arg(long, value_name = "TEXT")]
        search: Option<String>,
    },
    /// Borrow a book by ID
    Borrow {
        #[arg(value_name = "BOOK_ID")]
        book_id: BookId,
    },
    /// Return a book by ID
    Return {
        #[arg(value_name = "BOOK_ID")]
        book_id: BookId,
    },
    /// Save the URL given with --api-url to the configuration file
    Configure,
    /// Delete the saved configuration
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    log::set_max_level(logging::get_rust_log_level().into());

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_cmd_error!(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;

    let headless = match args.command {
        Command::Configure => {
            let api_url = args
                .api_url
                .ok_or("configure needs --api-url <URL> or LIBRARY_API_URL")?;
            Config::new(api_url.clone())
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            print_cmd_success!("Configuration saved", "API URL set to {}", api_url);
            return Ok(());
        }
        Command::Reset => {
            print_cmd_info!("Clearing configuration", "{}", config_path.display());
            Config::clear(&config_path)?;
            return Ok(());
        }
        Command::Start { with_background } => {
            let api_url = resolve_api_url(args.api_url, &config_path);
            let session = setup_session(api_url)?;
            return run_tui_mode(session, with_background).await;
        }
        Command::Stats => HeadlessCommand::Stats,
        Command::Books { search } => HeadlessCommand::Books { search },
        Command::Borrow { book_id } => HeadlessCommand::Borrow(book_id),
        Command::Return { book_id } => HeadlessCommand::Return(book_id),
    };

    let api_url = resolve_api_url(args.api_url, &config_path);
    let session = setup_session(api_url)?;
    run_headless_command(session, headless).await
}
