use colored::{ColoredString, Colorize};

use crate::config::Config;
use crate::error::BreathError;
use crate::output::SessionEvent;

/// Color a phase name the way the TUI does.
#[must_use]
pub fn colorize_phase(name: &str) -> ColoredString {
    match name {
        "Inhale" => name.cyan().bold(),
        "Hold" => name.yellow().bold(),
        "Exhale" => name.green().bold(),
        "Wait" => name.magenta().bold(),
        _ => name.normal(),
    }
}

/// Format a session event as a pretty line.
///
/// Only events worth a line of their own produce output; countdown and
/// elapsed updates return `None`.
#[must_use]
pub fn format_event_pretty(event: &SessionEvent, elapsed: &str) -> Option<String> {
    match event {
        SessionEvent::Phase { name } => {
            Some(format!("{}  {}", elapsed.dimmed(), colorize_phase(name)))
        }
        SessionEvent::Complete => Some(format!(
            "✅ Session complete! Total time: {}",
            elapsed.bold()
        )),
        SessionEvent::Paused => Some(format!("⏸️  Paused at {elapsed}")),
        SessionEvent::Idle => Some("Session reset".dimmed().to_string()),
        SessionEvent::Countdown { .. }
        | SessionEvent::Elapsed { .. }
        | SessionEvent::Controls { .. }
        | SessionEvent::RunControl { .. } => None,
    }
}

/// Format configuration as YAML
///
/// # Errors
///
/// Returns `BreathError::Config` if serialization fails.
pub fn format_config_pretty(config: &Config) -> Result<String, BreathError> {
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| BreathError::Config(format!("Failed to serialize config: {e}")))?;
    Ok(yaml.trim_end().to_string())
}
