//! Event handling for the TUI.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use onair_core::{EventDirectory, EventFilter};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use super::app::{App, Focus};
use super::ui;

/// Result type for TUI operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Transcript rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Initialize the terminal for TUI mode.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the TUI event loop.
pub fn run(directory: EventDirectory) -> Result<()> {
    info!(events = directory.len(), "Starting chat screen");

    let mut terminal = setup_terminal()?;
    let mut app = App::new(directory);

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal before reporting any loop error
    restore_terminal(&mut terminal)?;

    info!("Chat screen closed");
    result
}

/// Main event loop.
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => handle_key(app, key),
                Event::Mouse(mouse) => handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply a key press to the app.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return;
    }

    // AltGr arrives as Ctrl+Alt on Windows and must still type characters
    let altgr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if key.modifiers.contains(KeyModifiers::CONTROL) && !altgr {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Esc => {
            if app.focus == Focus::Events {
                app.should_quit = true;
            } else {
                app.set_focus(Focus::Events);
            }
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => match key.code {
            KeyCode::Char(c) => app.enter_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Enter | KeyCode::Down => app.set_focus(Focus::Events),
            _ => {}
        },
        Focus::Events => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.event_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => app.event_cursor_down(),
            KeyCode::Enter => app.select_under_cursor(),
            KeyCode::Left | KeyCode::Char('h') => app.prev_filter(),
            KeyCode::Right | KeyCode::Char('l') => app.next_filter(),
            KeyCode::Char('1') => app.set_filter(EventFilter::All),
            KeyCode::Char('2') => app.set_filter(EventFilter::Live),
            KeyCode::Char('3') => app.set_filter(EventFilter::Upcoming),
            KeyCode::Char('/') => app.set_focus(Focus::Search),
            KeyCode::Char('q') => app.should_quit = true,
            KeyCode::PageUp => app.scroll_page_up(PAGE_SIZE),
            KeyCode::PageDown => app.scroll_page_down(PAGE_SIZE),
            _ => {}
        },
        Focus::Message => match key.code {
            KeyCode::Enter => app.submit(),
            KeyCode::Char(c) => app.enter_char(c),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Up => app.scroll_up(),
            KeyCode::Down => app.scroll_down(),
            KeyCode::PageUp => app.scroll_page_up(PAGE_SIZE),
            KeyCode::PageDown => app.scroll_page_down(PAGE_SIZE),
            _ => {}
        },
    }
}

/// Apply a mouse event to the app.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click_at(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll_down(),
        _ => {}
    }
}
