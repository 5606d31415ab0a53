//! What the TUI shows, as last told by the session controller.

use crate::session::{format_elapsed, Presenter, RunLabel, PHASE_TICKS};

/// Instruction shown before a session starts and after a reset.
pub const IDLE_INSTRUCTION: &str = "Press Start to Begin";

/// Instruction shown when the time limit ends a session.
pub const COMPLETE_INSTRUCTION: &str = "Complete!";

/// Instruction shown while paused.
pub const PAUSED_INSTRUCTION: &str = "Paused";

/// Display model rendered by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    /// Phase name or session notice.
    pub instruction: String,
    /// Ticks left in the phase; blank when `None`.
    pub countdown: Option<u8>,
    /// Total elapsed time, MM:SS.
    pub elapsed: String,
    /// Whether the time-limit field is shown.
    pub controls_visible: bool,
    /// Label of the start/pause control.
    pub run_label: RunLabel,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            instruction: IDLE_INSTRUCTION.to_string(),
            countdown: Some(PHASE_TICKS),
            elapsed: format_elapsed(0),
            controls_visible: true,
            run_label: RunLabel::Start,
        }
    }
}

impl Presenter for Display {
    fn show_phase(&mut self, name: &str) {
        name.clone_into(&mut self.instruction);
    }

    fn show_countdown(&mut self, value: Option<u8>) {
        self.countdown = value;
    }

    fn show_elapsed(&mut self, formatted: &str) {
        formatted.clone_into(&mut self.elapsed);
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn set_run_control_label(&mut self, label: RunLabel) {
        self.run_label = label;
    }

    fn announce_complete(&mut self) {
        COMPLETE_INSTRUCTION.clone_into(&mut self.instruction);
    }

    fn announce_paused(&mut self) {
        PAUSED_INSTRUCTION.clone_into(&mut self.instruction);
    }

    fn announce_idle(&mut self) {
        IDLE_INSTRUCTION.clone_into(&mut self.instruction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle_display() {
        let display = Display::default();
        assert_eq!(display.instruction, IDLE_INSTRUCTION);
        assert_eq!(display.countdown, Some(4));
        assert_eq!(display.elapsed, "00:00");
        assert!(display.controls_visible);
        assert_eq!(display.run_label, RunLabel::Start);
    }

    #[test]
    fn test_announcements_replace_instruction() {
        let mut display = Display::default();
        display.show_phase("Exhale");
        assert_eq!(display.instruction, "Exhale");
        display.announce_paused();
        assert_eq!(display.instruction, PAUSED_INSTRUCTION);
        display.announce_complete();
        assert_eq!(display.instruction, COMPLETE_INSTRUCTION);
        display.announce_idle();
        assert_eq!(display.instruction, IDLE_INSTRUCTION);
    }
}
