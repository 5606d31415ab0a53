//! Display keep-awake via an OS inhibitor helper process.
//!
//! While a helper is alive the platform keeps the display on:
//! - macOS: `caffeinate -d -i -w <pid>`
//! - Linux: `systemd-inhibit --what=idle ... cat`
//!
//! The helper's stdin is a pipe we hold open; closing it lets `cat` exit on
//! its own, so no orphan outlives a release.

use std::process::{Child, Command, Stdio};

use tracing::debug;

use crate::error::BreathError;

/// Program and arguments that hold a keep-awake inhibitor while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InhibitCommand {
    /// Executable name or path
    pub program: String,
    /// Arguments passed to the executable
    pub args: Vec<String>,
}

impl InhibitCommand {
    /// Create a command from a program and arguments.
    #[must_use]
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// The inhibitor for the current platform, if there is one.
    #[must_use]
    pub fn for_platform() -> Option<Self> {
        if cfg!(target_os = "macos") {
            let pid = std::process::id().to_string();
            Some(Self::new("caffeinate", &["-d", "-i", "-w", &pid]))
        } else if cfg!(target_os = "linux") {
            Some(Self::new(
                "systemd-inhibit",
                &[
                    "--what=idle",
                    "--who=boxbreath",
                    "--why=Breathing session in progress",
                    "--mode=block",
                    "cat",
                ],
            ))
        } else {
            None
        }
    }
}

/// A single, idempotently held keep-awake lock.
#[derive(Debug)]
pub struct KeepAwake {
    command: Option<InhibitCommand>,
    child: Option<Child>,
}

impl KeepAwake {
    /// Keep-awake using the platform inhibitor.
    #[must_use]
    pub fn for_platform() -> Self {
        Self {
            command: InhibitCommand::for_platform(),
            child: None,
        }
    }

    /// Keep-awake using a specific helper command.
    #[must_use]
    pub const fn with_command(command: InhibitCommand) -> Self {
        Self {
            command: Some(command),
            child: None,
        }
    }

    /// Check if a lock is currently held.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.child.is_some()
    }

    /// Acquire the lock. A no-op if it is already held and the helper is alive.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` on platforms without an inhibitor, or `Feedback`
    /// if the helper cannot be spawned.
    pub fn acquire(&mut self) -> Result<(), BreathError> {
        if let Some(child) = self.child.as_mut() {
            match child.try_wait() {
                Ok(None) => return Ok(()),
                Ok(Some(status)) => debug!(%status, "keep-awake helper exited; respawning"),
                Err(e) => debug!(error = %e, "keep-awake helper unreachable; respawning"),
            }
            self.child = None;
        }

        let Some(command) = self.command.as_ref() else {
            return Err(BreathError::NotSupported(
                "keep-awake is not available on this platform".to_string(),
            ));
        };

        let child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                BreathError::Feedback(format!("Failed to start {}: {e}", command.program))
            })?;

        debug!(program = %command.program, pid = child.id(), "keep-awake acquired");
        self.child = Some(child);
        Ok(())
    }

    /// Release the lock. A no-op if nothing is held.
    ///
    /// # Errors
    ///
    /// Returns an error if the helper could not be stopped or reaped.
    pub fn release(&mut self) -> Result<(), BreathError> {
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        drop(child.stdin.take());
        if child.try_wait()?.is_none() {
            if let Err(e) = child.kill() {
                // The helper may exit between try_wait and kill.
                if e.kind() != std::io::ErrorKind::InvalidInput {
                    return Err(e.into());
                }
            }
        }
        child.wait()?;

        debug!("keep-awake released");
        Ok(())
    }
}

impl Drop for KeepAwake {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            debug!(error = %e, "keep-awake release on drop failed");
        }
    }
}
