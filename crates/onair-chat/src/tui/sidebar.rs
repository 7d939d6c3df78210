//! Event sidebar operations: list cursor, filter tabs and selection.

use onair_core::EventFilter;
use onair_models::EventId;
use tracing::debug;

use super::app::{App, Focus};

impl App {
    /// Keep the list cursor inside the filtered results.
    pub fn clamp_event_cursor(&mut self) {
        let count = self.visible_events().len();
        self.event_cursor = self.event_cursor.min(count.saturating_sub(1));
    }

    /// Move the list cursor up.
    pub fn event_cursor_up(&mut self) {
        self.event_cursor = self.event_cursor.saturating_sub(1);
    }

    /// Move the list cursor down.
    pub fn event_cursor_down(&mut self) {
        if self.event_cursor + 1 < self.visible_events().len() {
            self.event_cursor += 1;
        }
    }

    /// Switch the filter tab.
    pub fn set_filter(&mut self, filter: EventFilter) {
        if self.filter != filter {
            debug!(filter = %filter, "Filter changed");
        }
        self.filter = filter;
        self.clamp_event_cursor();
    }

    /// Next filter tab.
    pub fn next_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    /// Previous filter tab.
    pub fn prev_filter(&mut self) {
        self.set_filter(self.filter.prev());
    }

    /// Open an event by ID and reset its transcript.
    ///
    /// Returns false if the ID is not in the directory.
    pub fn select_event(&mut self, id: EventId) -> bool {
        let Some(event) = self.directory.get(id) else {
            return false;
        };
        self.session.select(event);

        if let Some(pos) = self.visible_events().iter().position(|e| e.id == id) {
            self.event_cursor = pos;
        }
        self.scroll_to_bottom();
        self.focus = Focus::Message;
        true
    }

    /// Open the event under the list cursor.
    pub fn select_under_cursor(&mut self) {
        let id = self.visible_events().get(self.event_cursor).map(|e| e.id);
        if let Some(id) = id {
            self.select_event(id);
        }
    }
}
