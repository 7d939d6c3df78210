//! Built-in demo data.

use onair_models::{Event, Message};

/// The demo event directory used when no events file is configured.
pub fn builtin_events() -> Vec<Event> {
    vec![
        Event::new(1, "Champions League: Barcelona vs. Munich", "Sports", "20:45", "Today", true),
        Event::new(2, "Taylor Swift Concert: Paris", "Music", "21:00", "Today", true),
        Event::new(3, "Global Tech Summit 2025", "Technology", "09:00", "Tomorrow", false),
        Event::new(4, "NBA Finals Game 3", "Sports", "19:30", "Tomorrow", false),
    ]
}

/// The transcript every selected event starts with.
pub fn seed_messages() -> Vec<Message> {
    vec![
        Message::new(1, "Maria", "So excited for this event!", "20:46"),
        Message::new(2, "Alex", "Anyone here from Berlin?", "20:48"),
        Message::new(3, "John", "What a start! Incredible performance.", "20:52"),
    ]
}
