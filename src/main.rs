use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use boxbreath::cli::args::{Cli, Commands};
use boxbreath::cli::commands;
use boxbreath::config::{Config, Paths};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::default();

    let (mut config, config_path) = match &cli.config {
        Some(path) => (
            Config::load_from_path(path)
                .with_context(|| format!("loading {}", path.display()))?,
            path.clone(),
        ),
        None => (
            Config::load().context("loading configuration")?,
            paths.config_file.clone(),
        ),
    };
    config.apply_overrides(&cli.session);

    let _log_guard = boxbreath::logging::init(&paths, cli.verbose);
    debug!(config = %config_path.display(), "configuration loaded");

    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        None | Some(Commands::Tui) => {
            boxbreath::tui::run(&config)?;
            String::new()
        }
        Some(Commands::Run) => commands::run(&config, format)?,
        Some(Commands::Config(args)) => {
            commands::config(&args.command, &config, &config_path, format)?
        }
        Some(Commands::Completions { shell }) => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
