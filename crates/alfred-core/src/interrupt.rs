//! Process interrupt flag.
//!
//! In raw mode Ctrl+C arrives as a key event, but SIGINT can still be
//! delivered from outside the terminal (or before the TUI starts). The
//! handler only records the signal; the runtime polls the flag.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);
static RESTORE_HOOK: OnceLock<Box<dyn Fn() + Send + Sync>> = OnceLock::new();

/// Exit status used when a second interrupt forces the process down.
pub const FORCED_EXIT_CODE: i32 = 130;

/// Initializes the Ctrl+C handler.
///
/// # Errors
/// Returns an error if a handler is already registered for this process.
pub fn init() -> Result<()> {
    ctrlc::set_handler(trigger_ctrl_c).context("Failed to set Ctrl+C handler")
}

/// Records an interrupt, force-exiting on a second one.
pub fn trigger_ctrl_c() {
    if INTERRUPTED.swap(true, Ordering::SeqCst) {
        // process::exit() bypasses Drop, so restore the terminal here.
        if let Some(hook) = RESTORE_HOOK.get() {
            hook();
        }
        std::process::exit(FORCED_EXIT_CODE);
    }
    tracing::debug!("interrupt received");
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Resets the interrupt flag.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}

/// Registers a restore hook called on the second Ctrl+C before exit.
///
/// Only the first registration wins.
pub fn set_restore_hook<F>(hook: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let _ = RESTORE_HOOK.set(Box::new(hook));
}
