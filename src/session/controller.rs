//! The session controller: a tick-driven cycle through the breathing phases.
//!
//! One controller owns one session. It keeps the [`SessionState`], decides
//! when a phase ends and when the time limit ends the session, and reports
//! every observable change to a [`Presenter`] and a [`Feedback`] sink.
//!
//! Time-limit policy: once the limit has been observed the session keeps
//! cycling and stops at the end of the next Exhale phase. An Exhale that ends
//! on the very tick the limit is first observed does not count; the session
//! then runs one more full cycle.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::session::limit::{format_elapsed, parse_time_limit};
use crate::session::phase::{Phase, PHASE_TICKS};
use crate::session::ports::{Feedback, Presenter, RunLabel};
use crate::session::state::{SessionState, SessionStatus};
use crate::session::ticker::Ticker;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session was not running; nothing changed.
    Ignored,
    /// The countdown moved within the current phase.
    Counted,
    /// A phase ended and the given phase began.
    PhaseAdvanced(Phase),
    /// The Exhale phase ended after the time limit; the session is over.
    Completed,
}

/// Drives a breathing session.
pub struct SessionController<P, F> {
    state: SessionState,
    ticker: Ticker,
    time_limit_input: Option<String>,
    sound_enabled: bool,
    presenter: P,
    feedback: F,
}

impl<P: Presenter, F: Feedback> SessionController<P, F> {
    /// Create an idle controller ticking once per second.
    pub fn new(presenter: P, feedback: F) -> Self {
        Self {
            state: SessionState::new(),
            ticker: Ticker::default(),
            time_limit_input: None,
            sound_enabled: true,
            presenter,
            feedback,
        }
    }

    /// Create an idle controller from settings: tick period, sound toggle,
    /// and the configured time-limit input.
    pub fn from_config(presenter: P, feedback: F, config: &Config) -> Self {
        let mut controller =
            Self::new(presenter, feedback).with_tick_period(config.session.tick_period());
        controller.sound_enabled = config.feedback.sound;
        controller
            .time_limit_input
            .clone_from(&config.session.time_limit_minutes);
        controller
    }

    /// Use a different tick period.
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.ticker = Ticker::new(period);
        self
    }

    /// Set the raw "time limit in minutes" input read by the next `start`.
    pub fn set_time_limit(&mut self, input: impl Into<String>) {
        self.time_limit_input = Some(input.into());
    }

    /// Make the next `start` unlimited.
    pub fn clear_time_limit(&mut self) {
        self.time_limit_input = None;
    }

    /// The raw time-limit input, if any.
    #[must_use]
    pub fn time_limit_input(&self) -> Option<&str> {
        self.time_limit_input.as_deref()
    }

    /// Enable or disable the phase cue.
    pub fn set_sound_enabled(&mut self, enabled: bool) {
        self.sound_enabled = enabled;
    }

    /// Check if the phase cue is enabled.
    #[must_use]
    pub const fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Check if the session is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// The presenter receiving notifications.
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The feedback sink.
    pub const fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Check if the tick source is armed.
    #[must_use]
    pub const fn is_ticking(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Start a fresh session from phase 0.
    ///
    /// Ignored while a session is running. A paused or completed session is
    /// discarded; there is no resume.
    pub fn start(&mut self) {
        if self.state.is_running() {
            debug!("start ignored: session already running");
            return;
        }

        let time_limit_ticks = parse_time_limit(self.time_limit_input.as_deref());
        self.state = SessionState {
            status: SessionStatus::Running,
            time_limit_ticks,
            ..SessionState::new()
        };
        info!(time_limit_ticks, "breathing session started");

        self.acquire_keep_awake();
        self.presenter.set_run_control_label(RunLabel::Pause);
        self.presenter.set_controls_visible(false);
        self.presenter.show_elapsed(&format_elapsed(0));
        self.show_current_phase();
        self.ticker.arm(Instant::now());
    }

    /// Set the time limit, then start.
    pub fn start_with_limit(&mut self, minutes: u32) {
        self.set_time_limit(minutes.to_string());
        self.start();
    }

    /// Stop ticking, keeping the session state. Ignored unless running.
    pub fn pause(&mut self) {
        if !self.state.is_running() {
            debug!(status = %self.state.status, "pause ignored: session not running");
            return;
        }

        self.ticker.cancel();
        self.state.status = SessionStatus::Paused;
        info!(
            elapsed_ticks = self.state.elapsed_ticks,
            phase = %self.state.phase(),
            "breathing session paused"
        );

        self.presenter.set_run_control_label(RunLabel::Start);
        self.presenter.announce_paused();
        self.release_keep_awake();
    }

    /// Start when stopped, pause when running.
    pub fn toggle(&mut self) {
        if self.state.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Return to the idle state from anywhere.
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.state = SessionState::new();
        info!("breathing session reset");

        self.presenter.announce_idle();
        self.presenter.show_countdown(Some(PHASE_TICKS));
        self.presenter.show_elapsed(&format_elapsed(0));
        self.presenter.set_run_control_label(RunLabel::Start);
        self.presenter.set_controls_visible(true);
        self.release_keep_awake();
    }

    /// Advance the session by one tick.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Ignored;
        }

        self.state.ticks_remaining = self.state.ticks_remaining.saturating_sub(1);
        if self.state.ticks_remaining == 0 {
            return self.complete_phase();
        }

        self.state.elapsed_ticks += 1;
        self.presenter
            .show_countdown(Some(self.state.ticks_remaining));
        self.presenter
            .show_elapsed(&format_elapsed(self.state.elapsed_ticks));
        self.latch_limit();
        TickOutcome::Counted
    }

    /// Run the tick due at `now`, if any. Returns how many ticks fired.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        while self.state.is_running() && self.ticker.take_due(now) {
            self.tick();
            fired += 1;
        }
        fired
    }

    /// Time until the next tick is due, or `None` when not ticking.
    #[must_use]
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }

    fn complete_phase(&mut self) -> TickOutcome {
        let finished = self.state.phase();
        self.state.elapsed_ticks += 1;
        self.presenter
            .show_elapsed(&format_elapsed(self.state.elapsed_ticks));

        if self.sound_enabled {
            if let Err(e) = self.feedback.play_phase_cue() {
                warn!(error = %e, "phase cue failed");
            }
        }

        if finished == Phase::Exhale && self.state.limit_reached {
            self.finish();
            return TickOutcome::Completed;
        }

        self.latch_limit();
        self.state.phase_index = finished.next().index();
        self.state.ticks_remaining = PHASE_TICKS;
        self.show_current_phase();

        let next = self.state.phase();
        debug!(
            from = %finished,
            to = %next,
            elapsed_ticks = self.state.elapsed_ticks,
            "phase advanced"
        );
        TickOutcome::PhaseAdvanced(next)
    }

    fn finish(&mut self) {
        self.ticker.cancel();
        self.state.status = SessionStatus::Complete;
        info!(
            elapsed_ticks = self.state.elapsed_ticks,
            time_limit_ticks = self.state.time_limit_ticks,
            "breathing session complete"
        );

        self.presenter.show_countdown(None);
        self.presenter.set_run_control_label(RunLabel::Start);
        self.presenter.announce_complete();
        self.presenter.set_controls_visible(true);
        self.release_keep_awake();
    }

    fn latch_limit(&mut self) {
        if !self.state.limit_reached && self.state.limit_exceeded() {
            self.state.limit_reached = true;
            debug!(
                elapsed_ticks = self.state.elapsed_ticks,
                phase = %self.state.phase(),
                "time limit reached; finishing after the next exhale"
            );
        }
    }

    fn show_current_phase(&mut self) {
        self.presenter.show_phase(self.state.phase().display_name());
        self.presenter.show_countdown(Some(self.state.ticks_remaining));
    }

    fn acquire_keep_awake(&mut self) {
        if let Err(e) = self.feedback.acquire_keep_awake() {
            warn!(error = %e, "keep-awake request failed");
        }
    }

    fn release_keep_awake(&mut self) {
        if let Err(e) = self.feedback.release_keep_awake() {
            warn!(error = %e, "keep-awake release failed");
        }
    }
}
