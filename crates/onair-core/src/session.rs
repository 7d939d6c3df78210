//! Selection and transcript state for the chat pane.
//!
//! The session moves between three states:
//!
//! ```text
//! NoSelection --select(e)--> Selected(e, seed)
//! Selected(e, *) --select(e')--> Selected(e', seed)      (e' may be e)
//! Selected(e, T) --send(non-blank)--> Selected(e, T + message)
//! ```
//!
//! Messages are never delivered anywhere; sending is a local echo.

use chrono::Local;
use onair_models::{Event, Message, MessageId};
use tracing::{debug, info};

use crate::seed::seed_messages;

/// Clock format for sent messages.
const TIME_FORMAT: &str = "%H:%M";

/// The open event and its transcript.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    selected: Option<Event>,
    transcript: Vec<Message>,
}

impl ChatSession {
    /// Creates a session with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an event and resets the transcript to the seed messages.
    ///
    /// Reselecting the open event also resets, discarding typed messages.
    pub fn select(&mut self, event: &Event) {
        info!(event = %event.id.tagged(), name = %event.name, "Selected event");
        self.selected = Some(event.clone());
        self.transcript = seed_messages();
    }

    /// The open event, if any.
    pub fn selected(&self) -> Option<&Event> {
        self.selected.as_ref()
    }

    /// Returns true if `event` is the open event.
    pub fn is_selected(&self, event: &Event) -> bool {
        self.selected.as_ref().is_some_and(|e| e.id == event.id)
    }

    /// Messages in display order.
    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    /// Appends a message from the local user, stamped with the current time.
    ///
    /// Returns `None` without changing anything when `text` is blank or no
    /// event is open.
    pub fn send(&mut self, text: &str) -> Option<&Message> {
        let time = Local::now().format(TIME_FORMAT).to_string();
        self.send_at(text, time)
    }

    /// Like [`send`](Self::send) with an explicit clock label.
    pub fn send_at(&mut self, text: &str, time: impl Into<String>) -> Option<&Message> {
        if text.trim().is_empty() {
            debug!("Ignoring blank message");
            return None;
        }
        if self.selected.is_none() {
            debug!("Ignoring message with no event selected");
            return None;
        }

        // Ids follow transcript length; nothing ever removes a message.
        let id = MessageId::new(self.transcript.len() as u32 + 1);
        self.transcript.push(Message::local(id, text, time));
        debug!(message_id = %id, "Sent local message");
        self.transcript.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onair_models::LOCAL_USER;

    fn finals() -> Event {
        Event::new(1, "Finals", "Sports", "19:30", "Today", true)
    }

    fn concert() -> Event {
        Event::new(2, "Concert", "Music", "21:00", "Tomorrow", false)
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = ChatSession::new();
        assert!(session.selected().is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_select_seeds_transcript() {
        let mut session = ChatSession::new();
        session.select(&finals());
        assert!(session.is_selected(&finals()));
        assert_eq!(session.messages(), seed_messages().as_slice());
    }

    #[test]
    fn test_send_appends_local_message() {
        let mut session = ChatSession::new();
        session.select(&finals());

        let sent = session.send("hello").cloned().unwrap();
        assert_eq!(sent.id, MessageId::new(4));
        assert_eq!(sent.user, LOCAL_USER);
        assert_eq!(sent.text, "hello");
        assert!(!sent.time.is_empty());
        assert_eq!(session.messages().len(), 4);
    }

    #[test]
    fn test_send_time_format() {
        let mut session = ChatSession::new();
        session.select(&finals());

        let time = session.send("hi").map(|m| m.time.clone()).unwrap();
        assert_eq!(time.len(), 5);
        assert_eq!(time.as_bytes()[2], b':');
    }

    #[test]
    fn test_send_keeps_text_verbatim() {
        let mut session = ChatSession::new();
        session.select(&finals());
        session.send_at("  padded  ", "21:00");
        assert_eq!(session.messages().last().unwrap().text, "  padded  ");
    }

    #[test]
    fn test_blank_send_is_noop() {
        let mut session = ChatSession::new();
        session.select(&finals());

        assert!(session.send("").is_none());
        assert!(session.send("   ").is_none());
        assert!(session.send("\t\n").is_none());
        assert_eq!(session.messages(), seed_messages().as_slice());
    }

    #[test]
    fn test_send_without_selection_is_noop() {
        let mut session = ChatSession::new();
        assert!(session.send("anything").is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_reselect_resets_transcript() {
        let mut session = ChatSession::new();
        session.select(&finals());
        session.send_at("go team", "20:55");
        assert_eq!(session.messages().len(), 4);

        session.select(&finals());
        assert_eq!(session.messages(), seed_messages().as_slice());
    }

    #[test]
    fn test_switching_events_resets_transcript() {
        let mut session = ChatSession::new();
        session.select(&finals());
        session.send_at("go team", "20:55");

        session.select(&concert());
        assert!(session.is_selected(&concert()));
        assert!(!session.is_selected(&finals()));
        assert_eq!(session.messages(), seed_messages().as_slice());
    }

    #[test]
    fn test_ids_follow_transcript_length() {
        let mut session = ChatSession::new();
        session.select(&finals());
        session.send_at("one", "21:00");
        session.send_at("two", "21:01");

        let ids: Vec<u32> = session.messages().iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
