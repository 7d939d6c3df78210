//! TUI application state.

use onair_core::{ChatSession, EventDirectory, EventFilter, EventQuery};
use onair_models::{Event, EventId};
use ratatui::layout::Rect;

use super::input::TextInput;

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Sidebar search box
    Search,
    /// Sidebar event list
    #[default]
    Events,
    /// Chat message box (only with an open event)
    Message,
}

/// Action triggered by clicking a region of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Open an event from the sidebar
    SelectEvent(EventId),
    /// Switch the filter tab
    SetFilter(EventFilter),
    /// Move focus to a text box
    Focus(Focus),
    /// Press the send button
    Send,
}

/// A clickable screen region registered during rendering.
#[derive(Debug, Clone)]
pub struct ClickableItem {
    /// Screen area of the region
    pub rect: Rect,
    /// What happens on click
    pub action: ClickAction,
}

impl ClickableItem {
    /// Returns true if the terminal cell is inside this region.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// TUI application state.
pub struct App {
    // Sidebar
    /// All events for this run
    pub directory: EventDirectory,
    /// Search box contents
    pub search: TextInput,
    /// Active filter tab
    pub filter: EventFilter,
    /// Highlighted row in the filtered event list
    pub event_cursor: usize,

    // Chat pane
    /// Open event and transcript
    pub session: ChatSession,
    /// Message box contents
    pub message: TextInput,
    /// Scroll offset for the transcript (0 = bottom)
    pub scroll_offset: usize,

    // UI state
    /// Widget receiving typed keys
    pub focus: Focus,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Regions registered by the last render
    pub(super) clickable_items: Vec<ClickableItem>,
}

impl App {
    /// Create a new App instance.
    pub fn new(directory: EventDirectory) -> Self {
        Self {
            directory,
            search: TextInput::new(),
            filter: EventFilter::default(),
            event_cursor: 0,

            session: ChatSession::new(),
            message: TextInput::new(),
            scroll_offset: 0,

            focus: Focus::default(),
            should_quit: false,
            clickable_items: Vec::new(),
        }
    }

    /// Current search term and filter, rebuilt on every call.
    pub fn query(&self) -> EventQuery {
        EventQuery::new()
            .with_search(self.search.value())
            .with_filter(self.filter)
    }

    /// Events shown in the sidebar, in directory order.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.directory.filtered(&self.query())
    }

    /// Move focus to `focus`. The message box needs an open event.
    pub fn set_focus(&mut self, focus: Focus) {
        if focus == Focus::Message && self.session.selected().is_none() {
            return;
        }
        self.focus = focus;
    }

    /// Cycle focus forward (Tab).
    pub fn focus_next(&mut self) {
        let next = match self.focus {
            Focus::Search => Focus::Events,
            Focus::Events if self.session.selected().is_some() => Focus::Message,
            Focus::Events | Focus::Message => Focus::Search,
        };
        self.focus = next;
    }

    /// Cycle focus backward (Shift+Tab).
    pub fn focus_prev(&mut self) {
        let prev = match self.focus {
            Focus::Search if self.session.selected().is_some() => Focus::Message,
            Focus::Search | Focus::Message => Focus::Events,
            Focus::Events => Focus::Search,
        };
        self.focus = prev;
    }

    /// Forget the regions from the previous frame.
    pub fn clear_clickable_items(&mut self) {
        self.clickable_items.clear();
    }

    /// Register a clickable region for the current frame.
    pub fn add_clickable_item(&mut self, rect: Rect, action: ClickAction) {
        self.clickable_items.push(ClickableItem { rect, action });
    }

    /// Regions registered by the last render.
    pub fn clickable_items(&self) -> &[ClickableItem] {
        &self.clickable_items
    }

    /// Handle a left click at a terminal cell. Returns true if something was hit.
    pub fn click_at(&mut self, x: u16, y: u16) -> bool {
        let action = self
            .clickable_items
            .iter()
            .find(|item| item.contains(x, y))
            .map(|item| item.action.clone());

        match action {
            Some(action) => {
                self.apply_click(action);
                true
            }
            None => false,
        }
    }

    /// Perform a click action.
    pub fn apply_click(&mut self, action: ClickAction) {
        match action {
            ClickAction::SelectEvent(id) => {
                self.select_event(id);
            }
            ClickAction::SetFilter(filter) => self.set_filter(filter),
            ClickAction::Focus(focus) => self.set_focus(focus),
            ClickAction::Send => self.submit(),
        }
    }
}
