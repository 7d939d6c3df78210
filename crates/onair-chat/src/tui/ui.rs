//! TUI rendering using ratatui.

use onair_core::EventFilter;
use onair_models::{Event, Message};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use super::app::{App, ClickAction, Focus};
use super::input::TextInput;

/// Width of the event sidebar in columns.
const SIDEBAR_WIDTH: u16 = 34;

/// Rows used by one event in the sidebar list.
const EVENT_ROW_HEIGHT: u16 = 3;

/// Width of the send button in columns.
const SEND_BUTTON_WIDTH: u16 = 10;

/// Draw the TUI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    // Clear clickable items before each render cycle
    app.clear_clickable_items();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(5),    // Sidebar + chat
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[1]);

    draw_sidebar(frame, app, body[0]);
    draw_chat(frame, app, body[1]);
    draw_footer(frame, app, chunks[2]);
}

/// Draw the header bar.
fn draw_header(frame: &mut Frame, area: Rect) {
    let style = Style::default().bg(Color::Blue).fg(Color::White);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(20)])
        .split(area);

    let title = Paragraph::new(" onAirChat").style(style.add_modifier(Modifier::BOLD));
    frame.render_widget(title, halves[0]);

    let icons = Paragraph::new("Alerts  Profile ")
        .style(style)
        .alignment(Alignment::Right);
    frame.render_widget(icons, halves[1]);
}

fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Tail of `value` that keeps the cursor inside a box `width` columns wide.
///
/// Returns the visible slice and the cursor column within it, both measured
/// in display width so wide characters take two cells.
fn input_window(value: &str, cursor: usize, width: usize) -> (&str, usize) {
    let cursor_byte = value
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(value.len());

    // One cell is reserved for the cursor itself
    let limit = width.saturating_sub(1);
    let mut start = cursor_byte;
    let mut col = 0;
    for (i, c) in value[..cursor_byte].char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if col + w > limit {
            break;
        }
        col += w;
        start = i;
    }

    (&value[start..], col)
}

/// Render a single-line text box, placing the terminal cursor when focused.
fn draw_text_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    input: &TextInput,
    placeholder: &str,
    focused: bool,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let (content, col) = if input.is_empty() {
        let hint = Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray));
        (hint, 0)
    } else {
        let (visible, col) = input_window(input.value(), input.cursor(), inner_width);
        (Span::raw(visible.to_string()), col)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(focused))
        .title(title.to_string());
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if focused {
        let col = col.min(inner_width.saturating_sub(1)) as u16;
        frame.set_cursor_position((area.x + 1 + col, area.y + 1));
    }
}

/// Draw the event sidebar: search box, filter tabs and event list.
fn draw_sidebar(frame: &mut Frame, app: &mut App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(1), // Filter tabs
            Constraint::Min(3),    // Event list
        ])
        .split(area);

    draw_text_box(
        frame,
        parts[0],
        " Search ",
        &app.search,
        "Search events...",
        app.focus == Focus::Search,
    );
    app.add_clickable_item(parts[0], ClickAction::Focus(Focus::Search));

    draw_filter_tabs(frame, app, parts[1]);
    draw_event_list(frame, app, parts[2]);
}

/// Draw the All / Live / Upcoming tabs.
fn draw_filter_tabs(frame: &mut Frame, app: &mut App, area: Rect) {
    let tabs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (filter, rect) in EventFilter::ALL.into_iter().zip(tabs.iter().copied()) {
        let style = if filter == app.filter {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let tab = Paragraph::new(filter.label())
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(tab, rect);
        app.add_clickable_item(rect, ClickAction::SetFilter(filter));
    }
}

/// First row of the list shown so the cursor stays visible.
fn list_offset(cursor: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible_rows - 1)
}

fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let kept: String = s.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Three-line sidebar entry: status and time, name, category.
fn event_lines(event: &Event, width: usize, is_cursor: bool) -> Text<'static> {
    let badge_style = if event.active {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if is_cursor { "> " } else { "  " };

    let status = Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("[{}]", event.badge()), badge_style),
        Span::styled(format!(" {}", event.time), Style::default().fg(Color::DarkGray)),
    ]);
    let name = Line::from(Span::styled(
        format!("  {}", fit(&event.name, width.saturating_sub(2))),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    let category = Line::from(Span::styled(
        format!("  {}", fit(&event.category, width.saturating_sub(2))),
        Style::default().fg(Color::DarkGray),
    ));

    Text::from(vec![status, name, category])
}

/// Draw the filtered event list and register a click region per row.
fn draw_event_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let events: Vec<Event> = app.visible_events().into_iter().cloned().collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(focus_border(app.focus == Focus::Events))
        .title(format!(" Events ({}) ", events.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if events.is_empty() {
        let empty = Paragraph::new("No events found")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let visible_rows = (inner.height / EVENT_ROW_HEIGHT) as usize;
    let offset = list_offset(app.event_cursor, visible_rows);
    let width = inner.width as usize;

    for (row, (index, event)) in events
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .enumerate()
    {
        let rect = Rect {
            x: inner.x,
            y: inner.y + row as u16 * EVENT_ROW_HEIGHT,
            width: inner.width,
            height: EVENT_ROW_HEIGHT,
        };

        let is_cursor = index == app.event_cursor && app.focus == Focus::Events;
        let style = if app.session.is_selected(event) {
            Style::default().bg(Color::Rgb(30, 40, 70))
        } else {
            Style::default()
        };

        let entry = Paragraph::new(event_lines(event, width, is_cursor)).style(style);
        frame.render_widget(entry, rect);
        app.add_clickable_item(rect, ClickAction::SelectEvent(event.id));
    }
}

/// Draw the chat pane, or the placeholder when no event is open.
fn draw_chat(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(event) = app.session.selected().cloned() else {
        draw_placeholder(frame, area);
        return;
    };

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Event info
            Constraint::Min(3),    // Transcript
            Constraint::Length(3), // Message input
        ])
        .split(area);

    draw_event_info(frame, &event, parts[0]);
    draw_transcript(frame, app, parts[1]);
    draw_message_input(frame, app, parts[2]);
}

fn draw_placeholder(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let text = Text::from(vec![
        Line::from(Span::styled(
            "Select an event",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Choose an event from the list to join the conversation",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(placeholder, rows[1]);
}

fn draw_event_info(frame: &mut Frame, event: &Event, area: Rect) {
    let mut title = vec![Span::styled(
        event.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if event.active {
        title.push(Span::raw("  "));
        title.push(Span::styled(
            " LIVE ",
            Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        ));
    }

    let text = Text::from(vec![
        Line::from(title),
        Line::from(Span::styled(event.subtitle(), Style::default().fg(Color::Gray))),
    ]);
    let info = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, area);
}

/// Lines for one message: author header, body, spacer.
fn message_lines(msg: &Message) -> [Line<'static>; 3] {
    let user_style = if msg.is_local() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let header = Line::from(vec![
        Span::styled(format!("({}) ", msg.initial()), Style::default().fg(Color::Blue)),
        Span::styled(msg.user.clone(), user_style),
        Span::styled(format!("  {}", msg.time), Style::default().fg(Color::DarkGray)),
    ]);
    let body = Line::from(format!("    {}", msg.text));

    [header, body, Line::default()]
}

/// Draw the transcript, pinned to the newest message unless scrolled.
fn draw_transcript(frame: &mut Frame, app: &App, area: Rect) {
    let title = if app.scroll_offset > 0 {
        format!(" Chat [scroll: {}] ", app.scroll_offset)
    } else {
        " Chat ".to_string()
    };

    let lines: Vec<Line> = app.session.messages().iter().flat_map(message_lines).collect();
    let transcript = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });

    // Rows after word wrapping, measured with the same wrapper that renders
    let inner_height = area.height.saturating_sub(2) as usize;
    let inner_width = area.width.saturating_sub(2);
    let total_rows = transcript.line_count(inner_width);

    // Show latest content, adjusted by user scroll
    let scroll = total_rows
        .saturating_sub(inner_height)
        .saturating_sub(app.scroll_offset)
        .min(u16::MAX as usize) as u16;

    let transcript = transcript
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll, 0));
    frame.render_widget(transcript, area);
}

/// Draw the message box and send button.
fn draw_message_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(SEND_BUTTON_WIDTH)])
        .split(area);

    draw_text_box(
        frame,
        parts[0],
        " Message ",
        &app.message,
        "Type your message...",
        app.focus == Focus::Message,
    );
    app.add_clickable_item(parts[0], ClickAction::Focus(Focus::Message));

    let button = Paragraph::new("Send")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, parts[1]);
    app.add_clickable_item(parts[1], ClickAction::Send);
}

/// Draw the footer with keybindings.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let keys = match app.focus {
        Focus::Search => "type to search | Enter/↓: events | Tab: next | Esc: back",
        Focus::Events => "↑/↓: move | Enter: open | ←/→ or 1-3: filter | /: search | q: quit",
        Focus::Message => "Enter: send | PgUp/PgDn: scroll | Tab: next | Esc: back",
    };

    let footer = Paragraph::new(format!(" {} | Ctrl+C: quit ", keys))
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use onair_core::EventDirectory;
    use onair_models::EventId;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.enter_char(c);
        }
    }

    fn click_rect(app: &App, action: &ClickAction) -> Rect {
        app.clickable_items()
            .iter()
            .find(|item| &item.action == action)
            .map(|item| item.rect)
            .unwrap()
    }

    #[test]
    fn test_list_offset() {
        assert_eq!(list_offset(0, 5), 0);
        assert_eq!(list_offset(4, 5), 0);
        assert_eq!(list_offset(6, 5), 2);
        assert_eq!(list_offset(3, 0), 3);
    }

    #[test]
    fn test_fit() {
        assert_eq!(fit("Finals", 10), "Finals");
        assert_eq!(fit("Champions League", 8), "Champio…");
    }

    #[test]
    fn test_placeholder_without_selection() {
        let mut app = App::new(EventDirectory::builtin());
        let screen = render(&mut app);

        assert!(screen.contains("onAirChat"));
        assert!(screen.contains("Select an event"));
        assert!(screen.contains("Choose an event from the list to join the conversation"));
        assert!(screen.contains("Taylor Swift Concert: Paris"));
        assert!(screen.contains("Upcoming"));
        assert!(!app.clickable_items().iter().any(|i| i.action == ClickAction::Send));
    }

    #[test]
    fn test_chat_pane_with_selection() {
        let mut app = App::new(EventDirectory::builtin());
        app.select_event(EventId::new(2));
        let screen = render(&mut app);

        assert!(screen.contains("Music • Live now"));
        assert!(screen.contains("So excited for this event!"));
        assert!(screen.contains("What a start! Incredible performance."));
        assert!(screen.contains("Type your message..."));
    }

    #[test]
    fn test_upcoming_subtitle() {
        let mut app = App::new(EventDirectory::builtin());
        app.select_event(EventId::new(3));
        let screen = render(&mut app);
        assert!(screen.contains("Technology • Tomorrow - 09:00"));
    }

    #[test]
    fn test_filter_hides_rows() {
        let mut app = App::new(EventDirectory::builtin());
        app.set_filter(EventFilter::Upcoming);
        let screen = render(&mut app);

        assert!(screen.contains("NBA Finals Game 3"));
        assert!(!screen.contains("Taylor Swift"));
        assert!(screen.contains("Events (2)"));
    }

    #[test]
    fn test_empty_results() {
        let mut app = App::new(EventDirectory::builtin());
        app.focus = Focus::Search;
        for c in "zzz".chars() {
            app.enter_char(c);
        }
        let screen = render(&mut app);
        assert!(screen.contains("No events found"));
    }

    #[test]
    fn test_click_event_row() {
        let mut app = App::new(EventDirectory::builtin());
        render(&mut app);

        let rect = click_rect(&app, &ClickAction::SelectEvent(EventId::new(4)));
        assert!(app.click_at(rect.x + 2, rect.y + 1));
        assert_eq!(app.session.selected().map(|e| e.id.get()), Some(4));
    }

    #[test]
    fn test_click_filter_tab() {
        let mut app = App::new(EventDirectory::builtin());
        render(&mut app);

        let rect = click_rect(&app, &ClickAction::SetFilter(EventFilter::Live));
        app.click_at(rect.x, rect.y);
        assert_eq!(app.filter, EventFilter::Live);
    }

    #[test]
    fn test_sent_message_rendered() {
        let mut app = App::new(EventDirectory::builtin());
        app.select_event(EventId::new(1));
        for c in "go team".chars() {
            app.enter_char(c);
        }
        app.submit();

        let screen = render(&mut app);
        assert!(screen.contains("go team"));
        assert!(screen.contains("(Y) You"));
    }

    #[test]
    fn test_input_window() {
        assert_eq!(input_window("hello", 5, 10), ("hello", 5));
        assert_eq!(input_window("abcdefghij", 10, 5), ("ghij", 4));
        assert_eq!(input_window("abcdef", 2, 3), ("abcdef", 2));
        assert_eq!(input_window("", 0, 10), ("", 0));
    }

    #[test]
    fn test_input_window_wide_chars() {
        assert_eq!(input_window("日本語", 3, 10), ("日本語", 6));
        assert_eq!(input_window("日本語", 3, 4), ("語", 2));
        assert_eq!(input_window("a日b", 2, 10), ("a日b", 3));
    }

    #[test]
    fn test_long_input_keeps_tail_visible() {
        let mut app = App::new(EventDirectory::builtin());
        app.select_event(EventId::new(1));
        type_text(&mut app, &"a".repeat(80));
        type_text(&mut app, "TAILEND");

        let screen = render(&mut app);
        assert!(screen.contains("TAILEND"));
    }

    #[test]
    fn test_cursor_column_counts_display_width() {
        let mut app = App::new(EventDirectory::builtin());
        app.select_event(EventId::new(1));
        type_text(&mut app, "日本");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();

        let rect = click_rect(&app, &ClickAction::Focus(Focus::Message));
        assert_eq!(cursor.x, rect.x + 1 + 4);
        assert_eq!(cursor.y, rect.y + 1);
    }

    #[test]
    fn test_newest_message_visible_after_long_messages() {
        let mut app = App::new(EventDirectory::builtin());
        app.select_event(EventId::new(1));

        let word = "w".repeat(40);
        let long = format!("{word} {word} {word}");
        for _ in 0..8 {
            type_text(&mut app, &long);
            app.submit();
        }
        type_text(&mut app, "FINALMSG");
        app.submit();

        assert_eq!(app.scroll_offset, 0);
        let screen = render(&mut app);
        assert!(screen.contains("FINALMSG"));
    }
}
