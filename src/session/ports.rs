//! Collaborators the session controller reports to.
//!
//! The controller only ever calls into these traits; it never reads display
//! state back.

use crate::error::BreathError;

/// Label of the single start/pause control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunLabel {
    /// Session is not running
    Start,
    /// Session is running
    Pause,
}

impl RunLabel {
    /// Get display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Pause => "Pause",
        }
    }
}

impl std::fmt::Display for RunLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Displays session progress.
#[cfg_attr(test, mockall::automock)]
pub trait Presenter {
    /// Show the name of the phase that just began.
    fn show_phase(&mut self, name: &str);

    /// Show the ticks left in the phase, or blank the countdown.
    fn show_countdown(&mut self, value: Option<u8>);

    /// Show total elapsed time, formatted MM:SS.
    fn show_elapsed(&mut self, formatted: &str);

    /// Show or hide the pre-session controls (time limit entry).
    fn set_controls_visible(&mut self, visible: bool);

    /// Relabel the start/pause control.
    fn set_run_control_label(&mut self, label: RunLabel);

    /// The session ended because the time limit was reached.
    fn announce_complete(&mut self);

    /// The session was paused.
    fn announce_paused(&mut self);

    /// The session was reset to its initial state.
    fn announce_idle(&mut self);
}

/// Audible cues and display keep-awake.
///
/// Every method is best-effort. Errors are logged by the caller and otherwise
/// ignored, and implementations must tolerate repeated calls.
#[cfg_attr(test, mockall::automock)]
pub trait Feedback {
    /// Play the cue marking a phase boundary. Fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns an error if the cue could not be emitted.
    fn play_phase_cue(&mut self) -> Result<(), BreathError>;

    /// Keep the display awake. A no-op if already held.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses the request.
    fn acquire_keep_awake(&mut self) -> Result<(), BreathError>;

    /// Let the display sleep again. A no-op if nothing is held.
    ///
    /// # Errors
    ///
    /// Returns an error if a held lock could not be released cleanly.
    fn release_keep_awake(&mut self) -> Result<(), BreathError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_label_display() {
        assert_eq!(RunLabel::Start.to_string(), "Start");
        assert_eq!(RunLabel::Pause.as_str(), "Pause");
    }
}
