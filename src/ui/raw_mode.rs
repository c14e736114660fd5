//! Terminal setup for the interactive view.
//!
//! Ensures the terminal is restored on drop (even on panic).

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io;
use tracing::debug;

/// Guard that enables raw mode on the alternate screen and restores the
/// terminal when dropped.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Raw mode disables line buffering and local echo, so every key press
    /// reaches the event loop immediately. Bracketed paste delivers pasted
    /// text as a single event.
    pub fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, Hide, EnableBracketedPaste)?;
        debug!("terminal in raw mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort restore - ignore errors during cleanup
        let _ = execute!(io::stdout(), DisableBracketedPaste, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        debug!("terminal restored");
    }
}
