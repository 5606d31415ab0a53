//! A presenter that prints a session to a terminal or pipe.

use std::io::{self, Stdout, Write};

use chrono::Local;
use colored::Colorize;
use tracing::warn;

use crate::cli::args::OutputFormat;
use crate::output::{format_event_json, format_event_pretty, SessionEvent};
use crate::session::{format_elapsed, Presenter, RunLabel};

/// Prints session events line by line.
///
/// Pretty output shows one line per phase plus pause/complete notices; JSON
/// output emits every notification as its own object.
pub struct ConsolePresenter<W: Write = Stdout> {
    out: W,
    format: OutputFormat,
    elapsed: String,
}

impl ConsolePresenter<Stdout> {
    /// Print to stdout.
    #[must_use]
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Print to any writer.
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            elapsed: format_elapsed(0),
        }
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Last elapsed time shown.
    #[must_use]
    pub fn elapsed(&self) -> &str {
        &self.elapsed
    }

    fn emit(&mut self, event: &SessionEvent) {
        if let SessionEvent::Elapsed { elapsed } = event {
            self.elapsed.clone_from(elapsed);
        }

        let line = match self.format {
            OutputFormat::Json => match format_event_json(event) {
                Ok(line) => Some(line),
                Err(e) => {
                    warn!(error = %e, "failed to serialize session event");
                    None
                }
            },
            OutputFormat::Pretty => match event {
                SessionEvent::Controls { visible: false } => Some(format!(
                    "{} {}",
                    "Breathing session started at".bold(),
                    Local::now().format("%H:%M:%S")
                )),
                _ => format_event_pretty(event, &self.elapsed),
            },
        };

        if let Some(line) = line {
            if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
                warn!(error = %e, "failed to write session output");
            }
        }
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn show_phase(&mut self, name: &str) {
        self.emit(&SessionEvent::Phase {
            name: name.to_string(),
        });
    }

    fn show_countdown(&mut self, value: Option<u8>) {
        self.emit(&SessionEvent::Countdown { value });
    }

    fn show_elapsed(&mut self, formatted: &str) {
        self.emit(&SessionEvent::Elapsed {
            elapsed: formatted.to_string(),
        });
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.emit(&SessionEvent::Controls { visible });
    }

    fn set_run_control_label(&mut self, label: RunLabel) {
        self.emit(&SessionEvent::RunControl {
            label: label.to_string(),
        });
    }

    fn announce_complete(&mut self) {
        self.emit(&SessionEvent::Complete);
    }

    fn announce_paused(&mut self) {
        self.emit(&SessionEvent::Paused);
    }

    fn announce_idle(&mut self) {
        self.emit(&SessionEvent::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::TerminalFeedback;
    use crate::session::SessionController;

    fn output_of(presenter: &ConsolePresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.writer().clone()).unwrap()
    }

    #[test]
    fn test_pretty_prints_one_line_per_phase() {
        colored::control::set_override(false);
        let presenter = ConsolePresenter::new(Vec::new(), OutputFormat::Pretty);
        let mut controller =
            SessionController::new(presenter, TerminalFeedback::new(Vec::new(), None));

        controller.start();
        for _ in 0..8 {
            controller.tick();
        }

        let output = output_of(controller.presenter());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Breathing session started at"));
        assert_eq!(lines[1], "00:00  Inhale");
        assert_eq!(lines[2], "00:04  Hold");
        assert_eq!(lines[3], "00:08  Exhale");
        assert_eq!(controller.presenter().elapsed(), "00:08");
    }

    #[test]
    fn test_pretty_completion_summary() {
        colored::control::set_override(false);
        let presenter = ConsolePresenter::new(Vec::new(), OutputFormat::Pretty);
        let mut controller =
            SessionController::new(presenter, TerminalFeedback::new(Vec::new(), None));

        controller.start_with_limit(1);
        while controller.is_running() {
            controller.tick();
        }

        let output = output_of(controller.presenter());
        let last = output.lines().last().unwrap();
        assert!(last.contains("Session complete"));
        assert!(last.contains("01:16"));
    }

    #[test]
    fn test_json_emits_every_notification() {
        let mut presenter = ConsolePresenter::new(Vec::new(), OutputFormat::Json);
        presenter.show_phase("Inhale");
        presenter.show_countdown(Some(4));
        presenter.set_run_control_label(RunLabel::Pause);
        presenter.announce_paused();

        let output = output_of(&presenter);
        let events: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0]["event"], "phase");
        assert_eq!(events[1]["value"], 4);
        assert_eq!(events[2]["label"], "Pause");
        assert_eq!(events[3]["event"], "paused");
    }
}
