//! Chat command handler.

use alfred_core::{config, interrupt, logging};
use anyhow::{Context, Result};

pub fn run() -> Result<()> {
    let config = config::Config::load().context("load config")?;

    // Held until return so buffered log lines are flushed.
    let _log_guard = logging::init(&config).context("init logging")?;

    interrupt::init()?;

    alfred_tui::run_interactive_chat()
        .inspect_err(|e| tracing::error!("chat failed: {e:#}"))
        .context("interactive chat failed")
}
