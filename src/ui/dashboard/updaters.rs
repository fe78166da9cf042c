//! Dashboard state update logic
//!
//! Applies controller updates to the dashboard state

use super::state::DashboardState;

use crate::controller::DashboardUpdate;
use chrono::Local;

impl DashboardState {
    /// Advance one tick and apply every queued update in arrival order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(update) = self.pending_updates.pop_front() {
            self.process_update(update);
        }
    }

    /// Apply a single update to the view.
    pub fn process_update(&mut self, update: DashboardUpdate) {
        match update {
            DashboardUpdate::LoadStarted => self.show_loading(),
            DashboardUpdate::StatsLoaded(stats) => self.render_stats(&stats),
            DashboardUpdate::BooksLoaded(books) => {
                self.render_books(&books);
                self.set_last_refreshed(Some(Local::now().format("%H:%M:%S").to_string()));
            }
            DashboardUpdate::LoadFailed(_) => self.show_error(),
            DashboardUpdate::Alert(alert) => self.show_alert(alert),
            DashboardUpdate::Log(event) => self.add_to_activity_log(event),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::controller::{Alert, DashboardUpdate};
    use crate::library::models::{Book, BookId, Stats};
    use crate::ui::dashboard::state::{DashboardState, Placeholder};

    fn one_book() -> Vec<Book> {
        vec![Book {
            id: BookId::Number(1),
            title: Some("Dune".to_string()),
            author: None,
            isbn: None,
            available: Some(true),
        }]
    }

    #[test]
    fn test_queued_updates_apply_in_order() {
        let mut state = DashboardState::new(String::new(), false);
        state.add_update(DashboardUpdate::LoadStarted);
        state.add_update(DashboardUpdate::StatsLoaded(Stats::new(1, 1, 0, 0)));
        state.add_update(DashboardUpdate::BooksLoaded(one_book()));
        state.update();

        assert_eq!(state.tick, 1);
        assert_eq!(state.book_count(), 1);
        assert_eq!(state.stats().total, "1");
        assert!(state.last_refreshed().is_some());
        assert!(state.pending_updates.is_empty());
    }

    #[test]
    fn test_load_failure_replaces_table_but_keeps_stats() {
        let mut state = DashboardState::new(String::new(), false);
        state.process_update(DashboardUpdate::StatsLoaded(Stats::new(4, 2, 2, 1)));
        state.process_update(DashboardUpdate::BooksLoaded(one_book()));
        state.process_update(DashboardUpdate::LoadFailed("boom".to_string()));

        assert_eq!(state.placeholder(), Some(Placeholder::Error));
        assert_eq!(state.stats().overdue, "1");
    }

    #[test]
    fn test_alert_update_is_held_until_dismissed() {
        let mut state = DashboardState::new(String::new(), false);
        state.process_update(DashboardUpdate::Alert(Alert::info("Book returned successfully")));
        assert_eq!(
            state.alert().map(|a| a.message.as_str()),
            Some("Book returned successfully")
        );
        state.dismiss_alert();
        assert!(state.alert().is_none());
    }
}
