//! Keyboard handling for the dashboard
//!
//! Translates key presses into view changes or requests for the controller.

use super::state::{DashboardState, InputMode};
use crate::controller::BookAction;
use crate::library::models::BookId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the app loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIntent {
    None,
    Quit,
    Refresh,
    Run(BookAction, BookId),
}

impl DashboardState {
    pub fn handle_key(&mut self, key: KeyEvent) -> UserIntent {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return UserIntent::Quit;
        }

        // An open alert swallows everything until acknowledged.
        if self.alert().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_alert();
            }
            return UserIntent::None;
        }

        match self.input_mode() {
            InputMode::Search => self.handle_search_key(key.code),
            InputMode::Normal => self.handle_normal_key(key.code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) -> UserIntent {
        match code {
            KeyCode::Enter => self.set_input_mode(InputMode::Normal),
            KeyCode::Esc => {
                self.filter("");
                self.set_input_mode(InputMode::Normal);
            }
            KeyCode::Backspace => {
                let mut term = self.filter_term().to_string();
                term.pop();
                self.filter(&term);
            }
            KeyCode::Char(c) => {
                let term = format!("{}{}", self.filter_term(), c);
                self.filter(&term);
            }
            _ => {}
        }
        UserIntent::None
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> UserIntent {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => UserIntent::Quit,
            KeyCode::Char('r') => UserIntent::Refresh,
            KeyCode::Char('/') => {
                self.set_input_mode(InputMode::Search);
                UserIntent::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                UserIntent::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                UserIntent::None
            }
            KeyCode::Enter | KeyCode::Char('b') => match self.selected_book() {
                Some(book) => UserIntent::Run(book.action(), book.id.clone()),
                None => UserIntent::None,
            },
            _ => UserIntent::None,
        }
    }
}
