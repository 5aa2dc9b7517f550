//! Full-screen TUI implementation for Alfred.

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use runtime::TuiRuntime;
pub use state::SessionState;

/// Runs the interactive chat loop until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal session
/// fails to start or breaks while running.
pub fn run_interactive_chat() -> Result<()> {
    // The view is drawn on stdout, so it must be a terminal
    if !stdout().is_terminal() {
        anyhow::bail!("Chat mode requires a terminal.");
    }

    tracing::info!("chat session starting");

    let mut runtime = TuiRuntime::new()?;
    let result = runtime.run();

    tracing::info!(
        transcript_len = runtime.state.transcript.len(),
        ok = result.is_ok(),
        "chat session ended"
    );

    result
}
