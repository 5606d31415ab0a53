//! Terminal feedback: an audible bell per phase and display keep-awake.

mod keep_awake;

pub use keep_awake::{InhibitCommand, KeepAwake};

use std::io::{self, Stdout, Write};

use crate::config::FeedbackConfig;
use crate::error::BreathError;
use crate::session::Feedback;

/// ASCII BEL.
const BELL: &[u8] = b"\x07";

/// Feedback for a terminal session.
///
/// The cue is a BEL written to `W`; keep-awake is delegated to a
/// [`KeepAwake`] helper, or skipped entirely when disabled.
pub struct TerminalFeedback<W: Write = Stdout> {
    bell: W,
    keep_awake: Option<KeepAwake>,
}

impl TerminalFeedback<Stdout> {
    /// Feedback ringing the bell on stdout, configured from settings.
    #[must_use]
    pub fn stdout(config: &FeedbackConfig) -> Self {
        Self::from_config(io::stdout(), config)
    }
}

impl<W: Write> TerminalFeedback<W> {
    /// Feedback ringing the bell on `bell`, configured from settings.
    ///
    /// The sound toggle is applied by the session controller, not here.
    pub fn from_config(bell: W, config: &FeedbackConfig) -> Self {
        let keep_awake = config.keep_awake.then(KeepAwake::for_platform);
        Self::new(bell, keep_awake)
    }

    /// Create feedback writing the cue to `bell`.
    pub const fn new(bell: W, keep_awake: Option<KeepAwake>) -> Self {
        Self { bell, keep_awake }
    }

    /// The writer receiving cues.
    pub const fn bell(&self) -> &W {
        &self.bell
    }

    /// Check if a keep-awake lock is currently held.
    #[must_use]
    pub fn keep_awake_held(&self) -> bool {
        self.keep_awake.as_ref().is_some_and(KeepAwake::is_held)
    }
}

impl<W: Write> Feedback for TerminalFeedback<W> {
    fn play_phase_cue(&mut self) -> Result<(), BreathError> {
        self.bell
            .write_all(BELL)
            .and_then(|()| self.bell.flush())
            .map_err(|e| BreathError::Feedback(format!("Failed to ring bell: {e}")))
    }

    fn acquire_keep_awake(&mut self) -> Result<(), BreathError> {
        match self.keep_awake.as_mut() {
            Some(lock) => lock.acquire(),
            None => Ok(()),
        }
    }

    fn release_keep_awake(&mut self) -> Result<(), BreathError> {
        match self.keep_awake.as_mut() {
            Some(lock) => lock.release(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_rings_bell() {
        let mut feedback = TerminalFeedback::new(Vec::new(), None);
        feedback.play_phase_cue().unwrap();
        feedback.play_phase_cue().unwrap();
        assert_eq!(feedback.bell(), b"\x07\x07");
    }

    #[test]
    fn test_disabled_keep_awake_is_noop() {
        let mut feedback = TerminalFeedback::new(Vec::new(), None);
        assert!(feedback.acquire_keep_awake().is_ok());
        assert!(!feedback.keep_awake_held());
        assert!(feedback.release_keep_awake().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_keep_awake_round_trip() {
        let lock = KeepAwake::with_command(InhibitCommand::new("cat", &[]));
        let mut feedback = TerminalFeedback::new(Vec::new(), Some(lock));

        feedback.acquire_keep_awake().unwrap();
        assert!(feedback.keep_awake_held());
        feedback.release_keep_awake().unwrap();
        assert!(!feedback.keep_awake_held());
        feedback.release_keep_awake().unwrap();
    }

    #[test]
    fn test_from_config_respects_toggle() {
        let config = FeedbackConfig {
            sound: true,
            keep_awake: false,
        };
        let feedback = TerminalFeedback::from_config(Vec::new(), &config);
        assert!(feedback.keep_awake.is_none());

        let feedback = TerminalFeedback::stdout(&FeedbackConfig::default());
        assert_eq!(
            feedback.keep_awake.is_some(),
            InhibitCommand::for_platform().is_some()
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_bell_failure_is_reported() {
        let mut feedback = TerminalFeedback::new(BrokenPipe, None);
        assert!(matches!(
            feedback.play_phase_cue(),
            Err(BreathError::Feedback(_))
        ));
    }
}
