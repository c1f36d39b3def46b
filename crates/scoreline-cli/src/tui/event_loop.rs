use std::io;

use crossterm::event::{self, Event};

/// Events processed by TUI applications.
#[derive(Debug, Clone)]
pub(super) enum TuiEvent {
    /// The application state may have changed since the last draw.
    Render,
    /// Terminal events such as key input, mouse, and resize.
    Crossterm(Event),
}

/// Event loop for turn-based applications.
///
/// There is no tick: the screen is redrawn once after every terminal event,
/// and the loop otherwise blocks until the next event arrives.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        // Initial render is required on startup
        Self { dirty: true }
    }
}

impl EventLoop {
    /// Returns the next event, blocking until a terminal event occurs if nothing is pending.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        let event = event::read()?;
        self.dirty = true;
        Ok(TuiEvent::Crossterm(event))
    }
}
