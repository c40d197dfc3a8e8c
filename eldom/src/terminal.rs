//! Crossterm-backed event source.

use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::{execute, terminal};
use thiserror::Error;

use crate::event::TermEvent;

/// Errors from the terminal event source.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),
}

/// Raw-mode terminal with mouse capture enabled. Restores the terminal
/// on drop.
pub struct Terminal {
    restored: bool,
}

impl Terminal {
    pub fn new() -> Result<Self, TerminalError> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnableMouseCapture)?;
        Ok(Self { restored: false })
    }

    /// Wait for the next convertible event. `None` timeout blocks;
    /// otherwise returns `Ok(None)` when the timeout elapses without a
    /// usable event.
    pub fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<TermEvent>, TerminalError> {
        let mut remaining = timeout;
        loop {
            if let Some(duration) = remaining {
                if !event::poll(duration)? {
                    return Ok(None);
                }
                // Don't re-wait the full timeout after draining an
                // unconvertible event.
                remaining = Some(Duration::ZERO);
            }
            if let Some(converted) = TermEvent::from_crossterm(event::read()?) {
                return Ok(Some(converted));
            }
        }
    }

    /// Restore the terminal early instead of waiting for drop.
    pub fn restore(&mut self) -> Result<(), TerminalError> {
        if !self.restored {
            self.restored = true;
            execute!(io::stdout(), DisableMouseCapture)?;
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}
