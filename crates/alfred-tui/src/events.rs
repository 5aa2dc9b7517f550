//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`.

use crossterm::event::Event;

/// Events fed to the reducer, one at a time.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A raw terminal event (key, paste, resize, focus, mouse).
    Terminal(Event),
    /// A process interrupt signal (SIGINT) was received.
    Interrupt,
}
