//! Scrolling operations for the transcript.

use super::App;

/// Rendered rows per message without wrapping: header, body, spacer.
pub(super) const LINES_PER_MESSAGE: usize = 3;

impl App {
    fn max_scroll(&self) -> usize {
        (self.session.messages().len() * LINES_PER_MESSAGE).saturating_sub(1)
    }

    /// Scroll to the newest message.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll up by one line.
    pub fn scroll_up(&mut self) {
        if self.scroll_offset < self.max_scroll() {
            self.scroll_offset += 1;
        }
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll up by a page.
    pub fn scroll_page_up(&mut self, page_size: usize) {
        self.scroll_offset = self
            .scroll_offset
            .saturating_add(page_size)
            .min(self.max_scroll());
    }

    /// Scroll down by a page.
    pub fn scroll_page_down(&mut self, page_size: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(page_size);
    }
}

#[cfg(test)]
mod tests {
    use onair_core::EventDirectory;
    use onair_models::EventId;

    use super::*;

    #[test]
    fn test_transcript_scroll() {
        let mut app = App::new(EventDirectory::builtin());

        // Nothing to scroll without a transcript
        app.scroll_up();
        assert_eq!(app.scroll_offset, 0);

        app.select_event(EventId::new(1));

        app.scroll_up();
        assert_eq!(app.scroll_offset, 1);

        app.scroll_down();
        assert_eq!(app.scroll_offset, 0);

        app.scroll_down();
        assert_eq!(app.scroll_offset, 0);

        app.scroll_page_up(20);
        assert_eq!(app.scroll_offset, 8);

        app.scroll_page_down(5);
        assert_eq!(app.scroll_offset, 3);

        app.scroll_to_bottom();
        assert_eq!(app.scroll_offset, 0);
    }
}
