//! Configuration command implementation.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::BreathError;
use crate::output::format_config;

/// Execute config subcommands.
///
/// `config` is the effective configuration, `path` the file it was read from.
///
/// # Errors
///
/// Returns an error if formatting fails, or if `init` cannot write the file.
pub fn config(
    cmd: &ConfigCommands,
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, BreathError> {
    match cmd {
        ConfigCommands::Show => format_config(config, format),
        ConfigCommands::Path => Ok(path.display().to_string()),
        ConfigCommands::Init { force } => init(path, *force),
    }
}

fn init(path: &Path, force: bool) -> Result<String, BreathError> {
    if path.exists() && !force {
        return Err(BreathError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    Config::default().save_to_path(path)?;
    Ok(format!(
        "{} {}",
        "Wrote default configuration to".green(),
        path.display()
    ))
}
