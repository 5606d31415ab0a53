//! Diagnostic logging.
//!
//! The TUI owns the terminal, so logs go to a daily rolling file under
//! `~/.boxbreath/logs/`. The filter comes from `BOXBREATH_LOG` and falls back
//! to `info`, or `debug` with `--verbose`.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Paths;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "BOXBREATH_LOG";

/// Prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "boxbreath.log";

/// Build the filter from the environment, or the default level.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    })
}

/// Install the global subscriber writing to the log directory.
///
/// Logging is best effort: if the directory cannot be created or a
/// subscriber is already set, the app runs without it. Keep the returned
/// guard alive until exit so buffered lines are flushed.
#[must_use]
pub fn init(paths: &Paths, verbose: bool) -> Option<WorkerGuard> {
    if paths.ensure_dirs().is_err() {
        return None;
    }

    let appender = tracing_appender::rolling::daily(&paths.logs, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}
