//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates `SessionState`; anything that touches the
//! terminal or the loop itself is expressed here.

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Stop the event loop.
    Quit,
}
