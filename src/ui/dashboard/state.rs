//! Dashboard state management
//!
//! Holds the rendered view of the dashboard: counters, table rows, filter and alert.
//! Rendering a region replaces its previous content wholesale.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::controller::{Alert, BookAction, DashboardUpdate};
use crate::events::Event;
use crate::library::models::{Book, BookId, Stats};

use std::collections::VecDeque;

/// The four counters of the stats strip, as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCounters {
    pub total: String,
    pub available: String,
    pub borrowed: String,
    pub overdue: String,
}

impl Default for StatsCounters {
    fn default() -> Self {
        Self {
            total: "0".to_string(),
            available: "0".to_string(),
            borrowed: "0".to_string(),
            overdue: "0".to_string(),
        }
    }
}

/// Synthetic single row shown instead of book rows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty,
    Error,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::Loading => "Loading books...",
            Placeholder::Empty => "No books found in the library",
            Placeholder::Error => "Failed to load data. Please try again.",
        }
    }
}

/// One rendered book. Cells hold display text, fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
    pub visible: bool,
}

impl BookRow {
    fn from_book(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.display_title().to_string(),
            author: book.display_author().to_string(),
            isbn: book.display_isbn().to_string(),
            available: book.is_available(),
            visible: true,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.available { "Available" } else { "Borrowed" }
    }

    pub fn action(&self) -> BookAction {
        BookAction::for_availability(self.available)
    }

    /// Case-insensitive substring match over title, author and ISBN.
    /// `term` must already be lowercase.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || [&self.title, &self.author, &self.isbn]
                .iter()
                .any(|cell| cell.to_lowercase().contains(term))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    Book(BookRow),
    Placeholder(Placeholder),
}

/// Where keystrokes go.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Dashboard view state.
#[derive(Debug)]
pub struct DashboardState {
    /// Base URL of the backend being displayed.
    pub api_url: String,
    /// Whether to paint a dark background.
    pub with_background_color: bool,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Updates waiting to be applied on the next tick
    pub pending_updates: VecDeque<DashboardUpdate>,
    /// Animation tick counter
    pub tick: usize,

    stats: StatsCounters,
    rows: Vec<TableRow>,
    filter_term: String,
    input_mode: InputMode,
    /// Index into the visible book rows
    selected: usize,
    /// Book under the cursor, kept across reloads
    selected_id: Option<BookId>,
    alert: Option<Alert>,
    /// Time of the last successful books render
    last_refreshed: Option<String>,
}

impl DashboardState {
    pub fn new(api_url: String, with_background_color: bool) -> Self {
        Self {
            api_url,
            with_background_color,
            activity_logs: VecDeque::new(),
            pending_updates: VecDeque::new(),
            tick: 0,
            stats: StatsCounters::default(),
            rows: vec![TableRow::Placeholder(Placeholder::Loading)],
            filter_term: String::new(),
            input_mode: InputMode::Normal,
            selected: 0,
            selected_id: None,
            alert: None,
            last_refreshed: None,
        }
    }

    pub fn stats(&self) -> &StatsCounters {
        &self.stats
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn filter_term(&self) -> &str {
        &self.filter_term
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn set_input_mode(&mut self, mode: InputMode) {
        self.input_mode = mode;
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn last_refreshed(&self) -> Option<&str> {
        self.last_refreshed.as_deref()
    }

    pub(super) fn set_last_refreshed(&mut self, timestamp: Option<String>) {
        self.last_refreshed = timestamp;
    }

    /// The placeholder currently filling the table, if any.
    pub fn placeholder(&self) -> Option<Placeholder> {
        match self.rows.as_slice() {
            [TableRow::Placeholder(p)] => Some(*p),
            _ => None,
        }
    }

    /// Writes the four counters. Missing fields show as 0.
    pub fn render_stats(&mut self, stats: &Stats) {
        self.stats = StatsCounters {
            total: stats.total(),
            available: stats.available(),
            borrowed: stats.borrowed(),
            overdue: stats.overdue(),
        };
    }

    /// Replaces the table with one row per book, or the empty placeholder.
    /// The active filter term is re-applied to the new rows and the cursor
    /// returns to the previously selected book when it is still visible.
    pub fn render_books(&mut self, books: &[Book]) {
        if books.is_empty() {
            self.rows = vec![TableRow::Placeholder(Placeholder::Empty)];
        } else {
            self.rows = books
                .iter()
                .map(|book| TableRow::Book(BookRow::from_book(book)))
                .collect();
        }
        self.apply_filter();

        let restored = self
            .selected_id
            .as_ref()
            .and_then(|id| self.visible_books().position(|book| &book.id == id));
        match restored {
            Some(index) => self.selected = index,
            None => self.clamp_selection(),
        }
        self.remember_selection();
    }

    pub fn show_loading(&mut self) {
        self.rows = vec![TableRow::Placeholder(Placeholder::Loading)];
        self.selected = 0;
    }

    pub fn show_error(&mut self) {
        self.rows = vec![TableRow::Placeholder(Placeholder::Error)];
        self.selected = 0;
    }

    /// Hides book rows whose title, author and ISBN all miss `term`.
    ///
    /// Only visibility changes; an empty term shows every row again.
    pub fn filter(&mut self, term: &str) {
        self.filter_term = term.to_string();
        self.apply_filter();
        self.clamp_selection();
        self.remember_selection();
    }

    fn apply_filter(&mut self) {
        let needle = self.filter_term.to_lowercase();
        for row in self.rows.iter_mut() {
            if let TableRow::Book(book) = row {
                book.visible = book.matches(&needle);
            }
        }
    }

    /// Book rows that survive the current filter.
    pub fn visible_books(&self) -> impl Iterator<Item = &BookRow> {
        self.rows.iter().filter_map(|row| match row {
            TableRow::Book(book) if book.visible => Some(book),
            _ => None,
        })
    }

    pub fn book_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, TableRow::Book(_)))
            .count()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_book(&self) -> Option<&BookRow> {
        self.visible_books().nth(self.selected)
    }

    pub fn select_next(&mut self) {
        let visible = self.visible_books().count();
        if visible > 0 && self.selected + 1 < visible {
            self.selected += 1;
        }
        self.remember_selection();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.remember_selection();
    }

    fn remember_selection(&mut self) {
        self.selected_id = self.selected_book().map(|book| book.id.clone());
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_books().count();
        if self.selected >= visible {
            self.selected = visible.saturating_sub(1);
        }
    }

    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an update to the processing queue
    pub fn add_update(&mut self, update: DashboardUpdate) {
        self.pending_updates.push_back(update);
    }
}
