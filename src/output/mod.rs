//! Output formatting for boxbreath.
//!
//! This module provides formatters for session events and configuration, and
//! a [`ConsolePresenter`] that prints a session as it runs.

mod console;
mod json;
mod pretty;

use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::BreathError;

pub use console::ConsolePresenter;
pub use json::*;
pub use pretty::*;

/// One presenter notification, in a printable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A phase began.
    Phase { name: String },
    /// The countdown changed; `None` blanks it.
    Countdown { value: Option<u8> },
    /// Total elapsed time changed.
    Elapsed { elapsed: String },
    /// Pre-session controls were shown or hidden.
    Controls { visible: bool },
    /// The start/pause control was relabelled.
    RunControl { label: String },
    /// The session reached its time limit.
    Complete,
    /// The session was paused.
    Paused,
    /// The session was reset.
    Idle,
}

/// Format configuration based on output format
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_config(config: &Config, format: OutputFormat) -> Result<String, BreathError> {
    match format {
        OutputFormat::Pretty => format_config_pretty(config),
        OutputFormat::Json => format_config_json(config),
    }
}
