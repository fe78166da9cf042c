//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::consts::cli_consts::ui;
use crate::controller::{DashboardController, DashboardUpdate};
use crate::ui::dashboard::{DashboardState, UserIntent, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::time::Instant;
use tokio::sync::mpsc;

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub api_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, api_url: String) -> Self {
        Self {
            with_background_color,
            api_url,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Catalog dashboard.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// View state; fed by updates even while the splash is up.
    dashboard: DashboardState,

    /// Issues fetches and circulation requests.
    controller: DashboardController,

    /// Receives updates from controller tasks.
    update_receiver: mpsc::Receiver<DashboardUpdate>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        controller: DashboardController,
        update_receiver: mpsc::Receiver<DashboardUpdate>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(ui_config.api_url, ui_config.with_background_color),
            controller,
            update_receiver,
        }
    }

    /// Acts on a user request coming from the dashboard.
    /// Returns false once the app should exit.
    fn dispatch(&mut self, intent: UserIntent) -> bool {
        match intent {
            UserIntent::None => {}
            UserIntent::Quit => return false,
            UserIntent::Refresh => self.controller.spawn_load_all(),
            UserIntent::Run(action, book_id) => self.controller.spawn_action(action, book_id),
        }
        true
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();

    // First load cycle starts right away, behind the splash.
    app.controller.spawn_load_all();

    loop {
        // Queue all incoming updates for processing
        while let Ok(update) = app.update_receiver.try_recv() {
            app.dashboard.add_update(update);
        }
        app.dashboard.update();

        terminal.draw(|f| render(f, app.current_screen, &app.dashboard))?;

        if app.current_screen == Screen::Splash && splash_start.elapsed() >= ui::splash_duration() {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events without starving the runtime
        if event::poll(ui::tick_rate())? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                match app.current_screen {
                    // Any key press skips the splash screen
                    Screen::Splash => app.current_screen = Screen::Dashboard,
                    Screen::Dashboard => {
                        let intent = app.dashboard.handle_key(key);
                        if !app.dispatch(intent) {
                            return Ok(());
                        }
                    }
                }
            }
        }
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, dashboard: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, dashboard),
    }
}
