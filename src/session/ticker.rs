//! The periodic tick source driving a session.
//!
//! A `Ticker` is armed once when a session starts and disarmed when it is
//! paused, reset, or completes. Front-ends poll it with the current instant;
//! it never fires on its own, so a disarmed ticker can never deliver a late
//! tick, and a stalled caller gets one tick back rather than the backlog.

use std::time::{Duration, Instant};

use tracing::debug;

/// Default tick period: one second.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable fixed-period schedule.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Create a disarmed ticker. A zero period falls back to the default.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = if period.is_zero() {
            DEFAULT_TICK_PERIOD
        } else {
            period
        };
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm the ticker so the first tick falls one period after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    /// Disarm the ticker. Pending ticks are discarded.
    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Check if the ticker is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// The tick period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Take the next tick if it is due at `now`.
    ///
    /// At most one tick is due per call. When the caller fell behind by a
    /// full period or more (a suspended process, a sleeping machine) the
    /// missed ticks are dropped and the schedule restarts one period after
    /// `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                let next = due + self.period;
                if next <= now {
                    let skipped = now.duration_since(due).as_nanos() / self.period.as_nanos();
                    debug!(
                        skipped = u64::try_from(skipped).unwrap_or(u64::MAX),
                        "tick source fell behind; skipping missed ticks"
                    );
                    self.next_due = Some(now + self.period);
                } else {
                    self.next_due = Some(next);
                }
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` when disarmed.
    #[must_use]
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_ticker_never_fires() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.is_armed());
        assert!(!ticker.take_due(now + Duration::from_secs(10)));
        assert_eq!(ticker.time_until_next(now), None);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        let start = Instant::now();
        ticker.arm(start);

        assert!(!ticker.take_due(start + Duration::from_millis(50)));

        // Slightly late polls keep the original schedule
        assert!(ticker.take_due(start + Duration::from_millis(130)));
        assert!(!ticker.take_due(start + Duration::from_millis(130)));
        assert_eq!(
            ticker.time_until_next(start + Duration::from_millis(130)),
            Some(Duration::from_millis(70))
        );
        assert!(ticker.take_due(start + Duration::from_millis(200)));
    }

    #[test]
    fn test_long_gap_fires_single_tick() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        let start = Instant::now();
        ticker.arm(start);

        let later = start + Duration::from_secs(3600);
        let mut fired = 0;
        while ticker.take_due(later) {
            fired += 1;
        }
        assert_eq!(fired, 1);
        assert_eq!(
            ticker.time_until_next(later),
            Some(Duration::from_millis(100))
        );
    }

    #[test]
    fn test_cancel_discards_backlog() {
        let mut ticker = Ticker::new(Duration::from_millis(10));
        let start = Instant::now();
        ticker.arm(start);
        ticker.cancel();
        assert!(!ticker.take_due(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_zero_period_uses_default() {
        let ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.period(), DEFAULT_TICK_PERIOD);
    }
}
