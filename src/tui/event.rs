//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::BreathError;
use crate::session::Feedback;
use crate::tui::app::App;

/// Key help shown in the status bar.
pub const HELP: &str = "space:start/pause | r:reset | l:time limit | m:sound | q:quit";

/// Action for the main loop after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Wait up to `timeout` for a terminal event and handle it.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<F: Feedback>(
    app: &mut App<F>,
    timeout: Duration,
) -> Result<Option<Action>, BreathError> {
    if event::poll(timeout).map_err(|e| BreathError::terminal("Event poll failed", e))? {
        if let Event::Key(key) =
            event::read().map_err(|e| BreathError::terminal("Event read failed", e))?
        {
            return Ok(handle_key(app, key));
        }
    }

    Ok(None)
}

/// Apply a key press to the app.
pub fn handle_key<F: Feedback>(app: &mut App<F>, key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.editing_limit {
        match key.code {
            KeyCode::Enter => app.commit_limit(),
            KeyCode::Esc => app.cancel_limit_edit(),
            KeyCode::Backspace => app.pop_limit_char(),
            KeyCode::Char(c) => app.push_limit_char(c),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char(' ' | 's') | KeyCode::Enter => app.toggle_run(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('l') => app.begin_limit_edit(),
        KeyCode::Char('m') => app.toggle_sound(),
        KeyCode::Char('?') => app.status = Some(HELP.to_string()),
        _ => app.status = None,
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::TerminalFeedback;
    use crate::session::{SessionController, SessionStatus};
    use crate::tui::display::Display;

    fn app() -> App<TerminalFeedback<Vec<u8>>> {
        App::new(SessionController::new(
            Display::default(),
            TerminalFeedback::new(Vec::new(), None),
        ))
    }

    fn press(app: &mut App<TerminalFeedback<Vec<u8>>>, code: KeyCode) -> Option<Action> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_space_toggles_session() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char(' ')), None);
        assert!(app.controller.is_running());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.state().status, SessionStatus::Paused);
    }

    #[test]
    fn test_reset_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller.state().status, SessionStatus::Idle);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            handle_key(
                &mut app,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_editing_captures_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        assert!(app.editing_limit);

        // 'q' and 'r' are not digits, so they are swallowed by the field
        assert_eq!(press(&mut app, KeyCode::Char('q')), None);
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.limit_input, "2");
        assert_eq!(app.controller.state().status, SessionStatus::Idle);

        press(&mut app, KeyCode::Enter);
        assert!(!app.editing_limit);
        assert_eq!(app.controller.time_limit_input(), Some("2"));
        assert!(!app.controller.is_running());
    }

    #[test]
    fn test_help_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.status.as_deref(), Some(HELP));
    }
}
