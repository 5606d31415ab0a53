//! JSON output formatting for boxbreath.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::Config;
use crate::error::BreathError;
use crate::output::SessionEvent;

#[derive(Serialize)]
struct Stamped<'a> {
    at: DateTime<Local>,
    #[serde(flatten)]
    event: &'a SessionEvent,
}

/// Format a session event as a single JSON line stamped with the local time.
///
/// # Errors
///
/// Returns `BreathError::Json` if serialization fails.
pub fn format_event_json(event: &SessionEvent) -> Result<String, BreathError> {
    let stamped = Stamped {
        at: Local::now(),
        event,
    };
    Ok(serde_json::to_string(&stamped)?)
}

/// Format configuration as JSON
///
/// # Errors
///
/// Returns `BreathError::Json` if serialization fails.
pub fn format_config_json(config: &Config) -> Result<String, BreathError> {
    Ok(serde_json::to_string_pretty(config)?)
}
