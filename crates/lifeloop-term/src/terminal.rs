//! Terminal mode management.

use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};
use tracing::error;

/// Puts the terminal into raw mode on the alternate screen with the
/// cursor hidden, and restores it when dropped.
///
/// Restoration also runs when the run loop returns an error or panics,
/// so the user's shell is never left in raw mode.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enter the alternate screen, hide the cursor, enable raw mode.
    pub fn enter(mut out: W) -> io::Result<Self> {
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        if let Err(e) = terminal::enable_raw_mode() {
            let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
            return Err(e);
        }
        Ok(Self { out })
    }

    /// The wrapped writer.
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.out, cursor::Show, terminal::LeaveAlternateScreen) {
            error!(?err, "failed to leave alternate screen");
        }
    }
}
