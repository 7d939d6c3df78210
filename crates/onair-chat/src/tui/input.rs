//! Input handling for the TUI.
//!
//! Contains the single-line text box used by the search and message fields,
//! and the App methods that route typing to whichever box has focus.

use tracing::debug;

use super::app::{App, Focus};

/// Single-line editable text with a cursor counted in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if there is no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }
}

impl App {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            Focus::Search => Some(&mut self.search),
            Focus::Message => Some(&mut self.message),
            Focus::Events => None,
        }
    }

    /// Handle character input.
    pub fn enter_char(&mut self, c: char) {
        if let Some(input) = self.focused_input() {
            input.insert(c);
        }
        if self.focus == Focus::Search {
            self.clamp_event_cursor();
        }
    }

    /// Delete character before cursor.
    pub fn delete_char(&mut self) {
        if let Some(input) = self.focused_input() {
            input.backspace();
        }
        if self.focus == Focus::Search {
            self.clamp_event_cursor();
        }
    }

    /// Move cursor left.
    pub fn move_cursor_left(&mut self) {
        if let Some(input) = self.focused_input() {
            input.move_left();
        }
    }

    /// Move cursor right.
    pub fn move_cursor_right(&mut self) {
        if let Some(input) = self.focused_input() {
            input.move_right();
        }
    }

    /// Move cursor to the start of the focused box.
    pub fn move_cursor_home(&mut self) {
        if let Some(input) = self.focused_input() {
            input.move_home();
        }
    }

    /// Move cursor to the end of the focused box.
    pub fn move_cursor_end(&mut self) {
        if let Some(input) = self.focused_input() {
            input.move_end();
        }
    }

    /// Send the message box contents to the open event.
    ///
    /// Blank input or no open event leaves everything untouched, including
    /// the message box.
    pub fn submit(&mut self) {
        if self.session.send(self.message.value()).is_none() {
            debug!("Submit ignored");
            return;
        }
        self.message.clear();
        self.scroll_to_bottom();
    }
}
