//! Terminal User Interface (TUI) for boxbreath.
//!
//! Shows the breathing instruction, countdown, and elapsed time, and lets the
//! user start, pause, reset, and set a time limit. Built with ratatui and
//! crossterm.

mod app;
mod display;
mod event;
mod ui;

pub use app::App;
pub use display::{Display, COMPLETE_INSTRUCTION, IDLE_INSTRUCTION, PAUSED_INSTRUCTION};

use std::io;
use std::time::Instant;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

use crate::config::Config;
use crate::error::BreathError;
use crate::feedback::TerminalFeedback;
use crate::session::{Feedback, SessionController};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), BreathError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| BreathError::terminal("Failed to enable raw mode", e))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| BreathError::terminal("Failed to setup terminal", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| BreathError::terminal("Failed to create terminal", e))?;

    // Create app state and run main loop
    let controller = SessionController::from_config(
        Display::default(),
        TerminalFeedback::stdout(&config.feedback),
        config,
    );
    let mut app = App::new(controller);
    info!("tui started");
    let result = run_app(&mut terminal, &mut app);

    // Releases keep-awake if a session is still running
    app.reset();

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend, F: Feedback>(
    terminal: &mut Terminal<B>,
    app: &mut App<F>,
) -> Result<(), BreathError> {
    loop {
        app.on_tick(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| BreathError::terminal("Failed to draw", e))?;

        // Handle events
        let timeout = app.poll_timeout(Instant::now());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
            }
        }
    }

    Ok(())
}
