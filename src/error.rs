//! Error types for boxbreath.

use thiserror::Error;

/// Errors surfaced by boxbreath outside the session core.
///
/// The session controller itself never fails; collaborator errors handed to it
/// are logged and dropped.
#[derive(Debug, Error)]
pub enum BreathError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization failure.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal setup or drawing failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The capability is unavailable on this platform.
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// An audio cue or keep-awake request failed.
    #[error("Feedback error: {0}")]
    Feedback(String),
}

impl BreathError {
    /// Shorthand for a terminal error carrying the failing step.
    pub(crate) fn terminal(step: &str, err: impl std::fmt::Display) -> Self {
        Self::Terminal(format!("{step}: {err}"))
    }
}
