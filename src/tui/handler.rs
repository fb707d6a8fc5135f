//! Event handler for the TUI
//!
//! Routes key presses to [`App`] actions. A pending delete captures the next
//! key: `y` confirms, anything else cancels.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) | Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.pending_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            _ => app.cancel_delete(),
        }
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => app.quit(),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        KeyCode::Char('t') => app.cycle_type_filter(),
        KeyCode::Char('c') => app.cycle_category_filter(),
        KeyCode::Char('[') => app.shift_month(false),
        KeyCode::Char(']') => app.shift_month(true),
        KeyCode::Char('r') => app.reset_filters(),

        KeyCode::Char('u') => app.cycle_currency(),

        _ => {}
    }

    Ok(())
}
