//! Core data models for onAirChat.
//!
//! This crate provides the plain data types shared by the event directory,
//! the chat session and the terminal interface.

pub mod event;
pub mod ids;
pub mod message;

// Re-export main types
pub use event::Event;
pub use ids::{EventId, MessageId};
pub use message::{Message, LOCAL_USER, PLACEHOLDER_AVATAR};
