//! File logging.
//!
//! The TUI owns stdout/stderr while it runs, so log output goes to
//! `$ALFRED_HOME/logs/alfred.log`. Nothing is installed (and no file is
//! created) unless `ALFRED_LOG` or `log_level` is set.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, paths};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "ALFRED_LOG";

/// File name of the log inside the logs directory.
pub const LOG_FILE_NAME: &str = "alfred.log";

/// Picks the filter directive: env var first, then config.
fn resolve_directive(env: Option<&str>, configured: Option<&str>) -> Option<String> {
    env.or(configured)
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .map(str::to_string)
}

/// Installs the global file subscriber if logging is enabled.
///
/// Returns the appender guard; keep it alive until exit so buffered lines
/// are flushed.
///
/// # Errors
/// Returns an error if the directive is invalid or the logs directory
/// cannot be created.
pub fn init(config: &Config) -> Result<Option<WorkerGuard>> {
    let env = std::env::var(LOG_ENV).ok();
    let Some(directive) = resolve_directive(env.as_deref(), config.log_level.as_deref()) else {
        return Ok(None);
    };

    let filter = EnvFilter::try_new(&directive)
        .with_context(|| format!("Invalid log filter '{directive}'"))?;

    let dir = paths::logs_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    // A subscriber installed earlier (e.g. by a test harness) wins.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .try_init();

    tracing::info!(path = %dir.join(LOG_FILE_NAME).display(), "logging initialized");
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_when_nothing_set() {
        assert_eq!(resolve_directive(None, None), None);
    }

    #[test]
    fn test_env_overrides_config() {
        assert_eq!(
            resolve_directive(Some("debug"), Some("warn")).as_deref(),
            Some("debug")
        );
    }

    #[test]
    fn test_config_used_without_env() {
        assert_eq!(
            resolve_directive(None, Some(" info ")).as_deref(),
            Some("info")
        );
    }

    #[test]
    fn test_blank_directive_disables_logging() {
        assert_eq!(resolve_directive(Some("  "), Some("info")), None);
    }
}
