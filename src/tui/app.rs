//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::session::limit::TICKS_PER_MINUTE;
use crate::session::{parse_time_limit, Feedback, SessionController};
use crate::tui::display::Display;

/// Longest the event loop waits for input before redrawing.
const MAX_POLL: Duration = Duration::from_millis(100);

/// Application state.
pub struct App<F: Feedback> {
    /// The session being displayed.
    pub controller: SessionController<Display, F>,
    /// Time-limit text being typed or last committed.
    pub limit_input: String,
    /// Whether keystrokes go to the time-limit field.
    pub editing_limit: bool,
    /// Status message to display.
    pub status: Option<String>,
}

impl<F: Feedback> App<F> {
    /// Create a new app instance around an idle controller.
    pub fn new(controller: SessionController<Display, F>) -> Self {
        let limit_input = controller.time_limit_input().unwrap_or_default().to_string();
        Self {
            controller,
            limit_input,
            editing_limit: false,
            status: Some("Press ? for help".to_string()),
        }
    }

    /// The display model.
    pub const fn display(&self) -> &Display {
        self.controller.presenter()
    }

    /// Fire any ticks due at `now`.
    pub fn on_tick(&mut self, now: Instant) {
        self.controller.poll(now);
    }

    /// How long to wait for input before the next tick or redraw.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.controller
            .time_until_next_tick(now)
            .map_or(MAX_POLL, |wait| wait.min(MAX_POLL))
    }

    /// Start or pause the session.
    pub fn toggle_run(&mut self) {
        if self.editing_limit {
            self.commit_limit();
        }
        self.controller.toggle();
        self.status = None;
    }

    /// Reset the session.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.status = None;
    }

    /// Toggle the phase bell.
    pub fn toggle_sound(&mut self) {
        let enabled = !self.controller.sound_enabled();
        self.controller.set_sound_enabled(enabled);
        self.status = Some(format!("Sound {}", if enabled { "on" } else { "off" }));
    }

    /// Start editing the time limit. Only allowed while controls are shown.
    pub fn begin_limit_edit(&mut self) {
        if self.display().controls_visible {
            self.editing_limit = true;
            self.status = Some("Type minutes, Enter to confirm, Esc to cancel".to_string());
        }
    }

    /// Append a typed character to the time-limit field.
    pub fn push_limit_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' {
            self.limit_input.push(c);
        }
    }

    /// Remove the last character of the time-limit field.
    pub fn pop_limit_char(&mut self) {
        self.limit_input.pop();
    }

    /// Hand the typed time limit to the controller for the next start.
    pub fn commit_limit(&mut self) {
        self.editing_limit = false;
        if self.limit_input.trim().is_empty() {
            self.controller.clear_time_limit();
        } else {
            self.controller.set_time_limit(self.limit_input.clone());
        }
        self.status = Some(format!("Time limit: {}", self.limit_label()));
    }

    /// Discard edits and restore the committed time limit.
    pub fn cancel_limit_edit(&mut self) {
        self.editing_limit = false;
        self.limit_input = self
            .controller
            .time_limit_input()
            .unwrap_or_default()
            .to_string();
        self.status = None;
    }

    /// Human-readable time limit for the field and status bar.
    #[must_use]
    pub fn limit_label(&self) -> String {
        match parse_time_limit(self.controller.time_limit_input()) {
            0 => "No limit".to_string(),
            ticks => format!("{} min", ticks / TICKS_PER_MINUTE),
        }
    }
}
