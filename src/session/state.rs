//! Session state owned by the controller.

use serde::{Deserialize, Serialize};

use crate::session::phase::{Phase, PHASE_TICKS};

/// Lifecycle status of a breathing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// No session has been started since the last reset
    #[default]
    Idle,
    /// Ticks are being processed
    Running,
    /// Stopped by the user; only a fresh start continues
    Paused,
    /// Ended by the time limit
    Complete,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Complete => write!(f, "Complete"),
        }
    }
}

/// Snapshot of a breathing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Current status
    pub status: SessionStatus,
    /// Position in the cycle, always in `0..4`
    pub phase_index: usize,
    /// Ticks left before the current phase completes, in `0..=4`
    pub ticks_remaining: u8,
    /// Ticks elapsed since the session started
    pub elapsed_ticks: u64,
    /// Limit in ticks; `0` means unlimited
    pub time_limit_ticks: u64,
    /// Latched once the limit has been observed
    pub limit_reached: bool,
}

impl SessionState {
    /// A fresh state at phase 0 with nothing elapsed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: SessionStatus::Idle,
            phase_index: 0,
            ticks_remaining: PHASE_TICKS,
            elapsed_ticks: 0,
            time_limit_ticks: 0,
            limit_reached: false,
        }
    }

    /// Check if ticks are being processed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// The phase currently in progress.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        Phase::from_index(self.phase_index)
    }

    /// Whether the configured limit has been reached.
    #[must_use]
    pub const fn limit_exceeded(&self) -> bool {
        self.time_limit_ticks > 0 && self.elapsed_ticks >= self.time_limit_ticks
    }

    /// Progress through the current phase (0.0 - 1.0).
    #[must_use]
    pub fn phase_progress(&self) -> f64 {
        1.0 - f64::from(self.ticks_remaining) / f64::from(PHASE_TICKS)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
