//! Command implementations for boxbreath.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod run;

pub use completions::completions;
pub use config::config;
pub use run::run;
