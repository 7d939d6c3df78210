//! Event records listed in the sidebar directory.

use serde::{Deserialize, Serialize};

use crate::ids::EventId;

/// A schedulable event people can chat about.
///
/// `time` and `date` are free-form display labels ("20:45", "Today") and are
/// never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier within the directory.
    pub id: EventId,

    /// Display name; the search term is matched against it.
    pub name: String,

    /// Category label such as "Sports" or "Music".
    pub category: String,

    /// Start time label.
    pub time: String,

    /// Date label.
    pub date: String,

    /// Whether the event is live right now.
    #[serde(default)]
    pub active: bool,
}

impl Event {
    /// Creates a new event.
    pub fn new(
        id: impl Into<EventId>,
        name: impl Into<String>,
        category: impl Into<String>,
        time: impl Into<String>,
        date: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            time: time.into(),
            date: date.into(),
            active,
        }
    }

    /// Returns true if the event is upcoming rather than live.
    pub fn is_upcoming(&self) -> bool {
        !self.active
    }

    /// Short status badge: `LIVE` for live events, otherwise the date label.
    pub fn badge(&self) -> &str {
        if self.active {
            "LIVE"
        } else {
            &self.date
        }
    }

    /// Subtitle shown above the transcript, e.g. `Sports • Live now`.
    pub fn subtitle(&self) -> String {
        if self.active {
            format!("{} • Live now", self.category)
        } else {
            format!("{} • {} - {}", self.category, self.date, self.time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concert() -> Event {
        Event::new(2, "Concert", "Music", "21:00", "Tomorrow", false)
    }

    #[test]
    fn test_badge() {
        let mut event = concert();
        assert_eq!(event.badge(), "Tomorrow");

        event.active = true;
        assert_eq!(event.badge(), "LIVE");
    }

    #[test]
    fn test_subtitle() {
        let mut event = concert();
        assert_eq!(event.subtitle(), "Music • Tomorrow - 21:00");

        event.active = true;
        assert_eq!(event.subtitle(), "Music • Live now");
    }

    #[test]
    fn test_deserialize_defaults_active() {
        let json = r#"{"id":9,"name":"Expo","category":"Tech","time":"10:00","date":"Friday"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, EventId::new(9));
        assert!(event.is_upcoming());
    }
}
