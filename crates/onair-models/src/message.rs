//! Chat messages shown in the transcript.

use serde::{Deserialize, Serialize};

use crate::ids::MessageId;

/// Display name used for messages typed locally.
pub const LOCAL_USER: &str = "You";

/// Avatar reference attached to every message. Never fetched.
pub const PLACEHOLDER_AVATAR: &str = "/api/placeholder/32/32";

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position-derived identifier, unique within one transcript.
    pub id: MessageId,
    /// Author display name.
    pub user: String,
    /// Message body.
    pub text: String,
    /// Clock label (`HH:MM`).
    pub time: String,
    /// Opaque avatar reference.
    pub avatar: String,
}

impl Message {
    /// Create a new message with the placeholder avatar.
    pub fn new(
        id: impl Into<MessageId>,
        user: impl Into<String>,
        text: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user: user.into(),
            text: text.into(),
            time: time.into(),
            avatar: PLACEHOLDER_AVATAR.to_string(),
        }
    }

    /// Create a message authored by the local user.
    pub fn local(id: impl Into<MessageId>, text: impl Into<String>, time: impl Into<String>) -> Self {
        Self::new(id, LOCAL_USER, text, time)
    }

    /// Returns true if the local user wrote this message.
    pub fn is_local(&self) -> bool {
        self.user == LOCAL_USER
    }

    /// Single-letter stand-in for the avatar in text-only views.
    pub fn initial(&self) -> char {
        self.user
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}
