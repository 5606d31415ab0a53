//! Console session command implementation.
//!
//! Runs a breathing session in the foreground, printing each phase.

use std::io::{self, Write};
use std::thread;
use std::time::Instant;

use tracing::info;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::BreathError;
use crate::feedback::TerminalFeedback;
use crate::output::ConsolePresenter;
use crate::session::{Feedback, Presenter, SessionController};

/// Run a session until it completes.
///
/// The bell goes to stderr so JSON output on stdout stays parseable.
///
/// # Errors
///
/// Returns `BreathError::Io` if the final flush of stdout fails.
pub fn run(config: &Config, format: OutputFormat) -> Result<String, BreathError> {
    let presenter = ConsolePresenter::stdout(format);
    let feedback = TerminalFeedback::from_config(io::stderr(), &config.feedback);
    let mut controller = SessionController::from_config(presenter, feedback, config);

    controller.start();
    drive(&mut controller);
    info!(
        elapsed_ticks = controller.state().elapsed_ticks,
        "console session finished"
    );

    io::stdout().flush()?;
    Ok(String::new())
}

/// Sleep until each tick is due and fire it, until the session stops.
fn drive<P: Presenter, F: Feedback>(controller: &mut SessionController<P, F>) {
    while controller.is_running() {
        controller.poll(Instant::now());
        if let Some(wait) = controller.time_until_next_tick(Instant::now()) {
            thread::sleep(wait);
        }
    }
}
