//! Thin synchronous wrapper over crossterm events so the runner and
//! handlers never import crossterm directly.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input events the application reacts to.
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Poll for an available event within `timeout`.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event, collapsing everything the UI ignores into
/// `InputEvent::Other`.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(key) => InputEvent::Key(key),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
