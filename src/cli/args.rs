use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "boxbreath")]
#[command(about = "A box-breathing timer for the terminal")]
#[command(long_about = "boxbreath - A box-breathing timer for the terminal

Guides you through the four phases of box breathing: Inhale, Hold,
Exhale and Wait, four seconds each. Tracks total session time and can
stop after a time limit, always at the end of an exhale.

QUICK START:
  boxbreath                 Open the full-screen timer
  boxbreath --limit 5       Five-minute session in the full-screen timer
  boxbreath run --limit 2   Two-minute session printed line by line

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      One JSON object per event, for scripting

For more information on a specific command, run:
  boxbreath <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the config file's general.default_output.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Use a config file other than ~/.boxbreath/config.yaml
    #[arg(long, global = true, env = "BOXBREATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug detail to ~/.boxbreath/logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub session: SessionArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Session options that override the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionArgs {
    /// Stop after this many minutes, at the end of an exhale
    ///
    /// Non-numeric values mean no limit.
    /// Example: --limit 5
    #[arg(short, long, global = true)]
    pub limit: Option<String>,

    /// Do not ring the bell at phase changes
    #[arg(short, long, global = true)]
    pub mute: bool,

    /// Do not keep the display awake during a session
    #[arg(long, global = true)]
    pub no_keep_awake: bool,

    /// Tick length in milliseconds (default 1000)
    #[arg(long, global = true, hide = true)]
    pub tick_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the full-screen breathing timer
    ///
    /// This is the default when no command is given.
    ///
    /// # Keys
    ///
    ///   Space/Enter  Start or pause
    ///   r            Reset
    ///   l            Edit the time limit
    ///   m            Toggle the bell
    ///   q            Quit
    Tui,

    /// Run a session printing each phase to the terminal
    ///
    /// Without a time limit the session runs until interrupted.
    ///
    /// # Examples
    ///
    ///   boxbreath run --limit 2
    ///   boxbreath run --limit 1 --output json
    Run,

    /// Show or create the configuration file
    ///
    /// # Examples
    ///
    ///   boxbreath config show
    ///   boxbreath config path
    ///   boxbreath config init
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// Outputs a completion script for the given shell.
    ///
    /// Example: boxbreath completions zsh > ~/.zsh/completions/_boxbreath
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_none() {
        let cli = Cli::try_parse_from(["boxbreath"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.session, SessionArgs::default());
        assert_eq!(cli.output, None);
    }

    #[test]
    fn test_session_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "boxbreath", "run", "--limit", "3", "--mute", "--no-keep-awake", "-o", "json",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Run)));
        assert_eq!(cli.session.limit.as_deref(), Some("3"));
        assert!(cli.session.mute);
        assert!(cli.session.no_keep_awake);
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["boxbreath", "config", "init", "--force"]).unwrap();
        match cli.command {
            Some(Commands::Config(args)) => {
                assert!(matches!(args.command, ConfigCommands::Init { force: true }));
            }
            _ => panic!("expected config command"),
        }
    }
}
