//! Terminal session guard.
//!
//! `TerminalSession::enter` switches the terminal into chat mode (raw input,
//! alternate screen, bracketed paste) and dropping the session switches it
//! back. `leave_screen` is also reachable from the panic hook and the
//! interrupt restore hook, so it must tolerate running more than once.

use std::io::{self, Stdout};
use std::panic;
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::render;
use crate::state::SessionState;

static PANIC_HOOK: Once = Once::new();

/// The full-screen terminal while chat mode is active.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    /// Puts the terminal into chat mode.
    ///
    /// On failure, whatever was already switched on is switched back off.
    ///
    /// # Errors
    /// Returns an error if stdout cannot be driven as a terminal.
    pub fn enter() -> Result<Self> {
        PANIC_HOOK.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                let _ = leave_screen();
                previous(info);
            }));
        });

        let entered = enter_screen().and_then(|()| {
            Terminal::new(CrosstermBackend::new(io::stdout()))
                .context("Failed to create terminal")
        });

        match entered {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = leave_screen();
                Err(err)
            }
        }
    }

    /// Redraws the whole screen from `state`.
    ///
    /// # Errors
    /// Returns an error if writing the frame fails.
    pub fn draw(&mut self, state: &SessionState) -> Result<()> {
        self.terminal
            .draw(|frame| render::render(state, frame))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        let _ = leave_screen();
    }
}

fn enter_screen() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)
        .context("Failed to enter alternate screen")?;
    Ok(())
}

/// Switches the terminal back to normal mode.
///
/// # Errors
/// Returns an error if raw mode cannot be turned off.
pub fn leave_screen() -> Result<()> {
    // Best effort: the screen may never have been entered
    let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode().context("Failed to disable raw mode")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Entering needs a real TTY; leaving must be safe without one.
    #[test]
    fn test_leave_screen_is_repeatable_without_entering() {
        assert!(leave_screen().is_ok());
        assert!(leave_screen().is_ok());
    }
}
