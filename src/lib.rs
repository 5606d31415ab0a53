//! boxbreath - A box-breathing timer for the terminal
//!
//! This crate provides the breathing session state machine, a full-screen
//! timer built on ratatui, and a line-oriented console mode.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod output;
pub mod session;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BreathError;
pub use session::{Phase, SessionController, SessionState, SessionStatus};
