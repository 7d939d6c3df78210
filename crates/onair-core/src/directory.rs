//! Event directory with search and live/upcoming filtering.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use onair_models::{Event, EventId};
use tracing::info;

use crate::error::{CoreError, Result};
use crate::seed::builtin_events;

/// Which events the sidebar shows, by live status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventFilter {
    /// No status constraint.
    #[default]
    All,
    /// Only events that are live now.
    Live,
    /// Only events that have not started.
    Upcoming,
}

impl EventFilter {
    /// All filters in tab order.
    pub const ALL: [EventFilter; 3] = [EventFilter::All, EventFilter::Live, EventFilter::Upcoming];

    /// Returns true if the event passes this filter.
    pub fn matches(self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Live => event.active,
            EventFilter::Upcoming => !event.active,
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            EventFilter::All => "All",
            EventFilter::Live => "Live",
            EventFilter::Upcoming => "Upcoming",
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        match self {
            EventFilter::All => EventFilter::Live,
            EventFilter::Live => EventFilter::Upcoming,
            EventFilter::Upcoming => EventFilter::All,
        }
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            EventFilter::All => EventFilter::Upcoming,
            EventFilter::Live => EventFilter::All,
            EventFilter::Upcoming => EventFilter::Live,
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventFilter::All => "all",
            EventFilter::Live => "live",
            EventFilter::Upcoming => "upcoming",
        };
        f.write_str(name)
    }
}

impl FromStr for EventFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(EventFilter::All),
            "live" | "active" => Ok(EventFilter::Live),
            "upcoming" => Ok(EventFilter::Upcoming),
            _ => Err(CoreError::UnknownFilter(s.to_string())),
        }
    }
}

/// Search term plus filter mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Case-insensitive substring matched against event names.
    pub search: String,
    /// Live status filter.
    pub filter: EventFilter,
}

impl EventQuery {
    /// Creates a query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Sets the filter mode.
    pub fn with_filter(mut self, filter: EventFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns true if the event matches both the search term and the filter.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.filter.matches(event) {
            return false;
        }

        if self.search.is_empty() {
            return true;
        }

        event
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }
}

/// The fixed list of events for a session.
#[derive(Debug, Clone)]
pub struct EventDirectory {
    events: Vec<Event>,
}

impl EventDirectory {
    /// Creates a directory, rejecting duplicate IDs.
    pub fn new(events: Vec<Event>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CoreError::DuplicateEventId(event.id));
            }
        }
        Ok(Self { events })
    }

    /// The built-in demo directory.
    pub fn builtin() -> Self {
        Self {
            events: builtin_events(),
        }
    }

    /// Loads a directory from a JSON array of events.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let events: Vec<Event> =
            serde_json::from_str(&content).map_err(|source| CoreError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let directory = Self::new(events)?;
        info!(path = %path.display(), count = directory.len(), "Loaded event directory");
        Ok(directory)
    }

    /// Loads from `path` when given, otherwise returns the built-in directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => Ok(Self::builtin()),
        }
    }

    /// All events in directory order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Looks up an event by ID.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events matching the query, in directory order.
    pub fn filtered(&self, query: &EventQuery) -> Vec<&Event> {
        self.events.iter().filter(|e| query.matches(e)).collect()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the directory has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finals_and_concert() -> EventDirectory {
        EventDirectory::new(vec![
            Event::new(1, "Finals", "Sports", "19:30", "Today", true),
            Event::new(2, "Concert", "Music", "21:00", "Tomorrow", false),
        ])
        .unwrap()
    }

    fn ids(events: &[&Event]) -> Vec<u32> {
        events.iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let dir = finals_and_concert();
        assert_eq!(ids(&dir.filtered(&EventQuery::new())), vec![1, 2]);
    }

    #[test]
    fn test_live_filter() {
        let dir = finals_and_concert();
        let query = EventQuery::new().with_filter(EventFilter::Live);
        assert_eq!(ids(&dir.filtered(&query)), vec![1]);
    }

    #[test]
    fn test_upcoming_filter() {
        let dir = finals_and_concert();
        let query = EventQuery::new().with_filter(EventFilter::Upcoming);
        assert_eq!(ids(&dir.filtered(&query)), vec![2]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let dir = finals_and_concert();
        let query = EventQuery::new().with_search("CON");
        assert_eq!(ids(&dir.filtered(&query)), vec![2]);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let dir = finals_and_concert();
        let query = EventQuery::new()
            .with_search("con")
            .with_filter(EventFilter::Live);
        assert!(dir.filtered(&query).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let dir = EventDirectory::builtin();
        let query = EventQuery::new().with_search("U");
        assert_eq!(ids(&dir.filtered(&query)), vec![1, 3]);
    }

    #[test]
    fn test_builtin_live_events() {
        let dir = EventDirectory::builtin();
        let query = EventQuery::new().with_filter(EventFilter::Live);
        assert_eq!(ids(&dir.filtered(&query)), vec![1, 2]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = EventDirectory::new(vec![
            Event::new(1, "A", "X", "10:00", "Today", true),
            Event::new(1, "B", "X", "11:00", "Today", false),
        ]);
        assert!(matches!(result, Err(CoreError::DuplicateEventId(id)) if id.get() == 1));
    }

    #[test]
    fn test_get() {
        let dir = finals_and_concert();
        assert_eq!(dir.get(EventId::new(2)).map(|e| e.name.as_str()), Some("Concert"));
        assert!(dir.get(EventId::new(99)).is_none());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<EventFilter>().unwrap(), EventFilter::All);
        assert_eq!("Live".parse::<EventFilter>().unwrap(), EventFilter::Live);
        assert_eq!("active".parse::<EventFilter>().unwrap(), EventFilter::Live);
        assert_eq!("upcoming".parse::<EventFilter>().unwrap(), EventFilter::Upcoming);
        assert!("soon".parse::<EventFilter>().is_err());
    }

    #[test]
    fn test_filter_cycle() {
        let mut filter = EventFilter::All;
        for expected in [EventFilter::Live, EventFilter::Upcoming, EventFilter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
        }
        assert_eq!(EventFilter::All.prev(), EventFilter::Upcoming);
        assert_eq!(EventFilter::Upcoming.prev().next(), EventFilter::Upcoming);
    }

    #[test]
    fn test_from_json_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("events.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 10, "name": "Derby", "category": "Sports", "time": "18:00", "date": "Today", "active": true},
                {"id": 11, "name": "Keynote", "category": "Technology", "time": "09:00", "date": "Monday"}
            ]"#,
        )
        .unwrap();

        let dir = EventDirectory::load(Some(&path)).unwrap();
        assert_eq!(dir.len(), 2);
        assert!(dir.get(EventId::new(11)).is_some_and(|e| !e.active));
    }

    #[test]
    fn test_from_json_file_errors() {
        let temp_dir = tempfile::tempdir().unwrap();

        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(
            EventDirectory::from_json_file(&missing),
            Err(CoreError::Io { .. })
        ));

        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&bad, "{not json").unwrap();
        assert!(matches!(
            EventDirectory::from_json_file(&bad),
            Err(CoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_without_path_is_builtin() {
        let dir = EventDirectory::load(None).unwrap();
        assert_eq!(dir.len(), 4);
        assert!(!dir.is_empty());
    }
}
