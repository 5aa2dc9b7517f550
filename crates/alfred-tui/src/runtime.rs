//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! The loop is single-threaded: wait for one event, reduce it, redraw.
//! The only reason it wakes without input is to observe the interrupt flag.

use std::time::Duration;

use alfred_core::interrupt;
use anyhow::{Context, Result};
use crossterm::event;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::SessionState;
use crate::terminal::{self, TerminalSession};
use crate::update;

/// How long to block on terminal input before re-checking the interrupt flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal session and state. The terminal goes back to normal
/// mode when the runtime is dropped.
pub struct TuiRuntime {
    session: TerminalSession,
    pub state: SessionState,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be put into chat mode.
    pub fn new() -> Result<Self> {
        interrupt::set_restore_hook(|| {
            let _ = terminal::leave_screen();
        });

        // Drop any interrupt that arrived before the UI existed
        interrupt::reset();

        let session = TerminalSession::enter().context("Failed to setup terminal")?;

        Ok(Self {
            session,
            state: SessionState::new(),
        })
    }

    /// Runs the main event loop until a quit effect is executed.
    ///
    /// # Errors
    /// Returns an error if reading terminal events or drawing fails.
    pub fn run(&mut self) -> Result<()> {
        self.session.draw(&self.state)?;

        while !self.state.should_quit {
            let Some(event) = next_event()? else {
                continue;
            };

            let effects = update::update(&mut self.state, event);
            self.execute_effects(effects);

            if !self.state.should_quit {
                self.session.draw(&self.state)?;
            }
        }

        Ok(())
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
        }
    }
}

/// Waits up to `POLL_INTERVAL` for the next event.
fn next_event() -> Result<Option<UiEvent>> {
    if interrupt::is_interrupted() {
        return Ok(Some(UiEvent::Interrupt));
    }

    if event::poll(POLL_INTERVAL).context("Failed to poll terminal events")? {
        let term_event = event::read().context("Failed to read terminal event")?;
        return Ok(Some(UiEvent::Terminal(term_event)));
    }

    Ok(None)
}
