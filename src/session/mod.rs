//! Box-breathing sessions.
//!
//! Cycles through four fixed phases with time tracking:
//! - Inhale, Hold, Exhale, Wait; four ticks each
//! - Optional time limit, honoured at the end of an Exhale
//! - Presenter and feedback notifications on every change

pub mod controller;
pub mod limit;
pub mod phase;
pub mod ports;
pub mod state;
pub mod ticker;

pub use controller::{SessionController, TickOutcome};
pub use limit::{format_elapsed, parse_time_limit};
pub use phase::{Phase, PHASE_TICKS};
pub use ports::{Feedback, Presenter, RunLabel};
pub use state::{SessionState, SessionStatus};
pub use ticker::{Ticker, DEFAULT_TICK_PERIOD};
