//! Terminal User Interface for onAirChat.
//!
//! Provides a two-pane TUI with:
//! - Header with the app title
//! - Event sidebar with search box, All/Live/Upcoming tabs and event list
//! - Chat pane with event details, transcript and message input
//! - Footer with keybindings

mod app;
mod events;
mod input;
mod scroll;
mod sidebar;
mod ui;

pub use app::{App, ClickAction, ClickableItem, Focus};
pub use events::{handle_key, handle_mouse, run};
pub use input::TextInput;
pub use ui::draw;
