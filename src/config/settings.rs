//! Configuration settings for boxbreath.
//!
//! Settings are loaded from `~/.boxbreath/config.yaml`.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::cli::args::{OutputFormat, SessionArgs};
use crate::config::Paths;
use crate::error::BreathError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Breathing session settings.
    pub session: SessionConfig,
    /// Bell and keep-awake settings.
    pub feedback: FeedbackConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Breathing session settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Time limit in minutes, kept as entered.
    ///
    /// Anything that does not parse as a non-negative number means no limit.
    #[serde(
        default,
        deserialize_with = "deserialize_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_limit_minutes: Option<String>,
    /// Length of one tick in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

/// Bell and keep-awake settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Ring the terminal bell at each phase change.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Keep the display awake while a session runs.
    #[serde(default = "default_true")]
    pub keep_awake: bool,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_tick_millis() -> u64 {
    1000
}

const fn default_true() -> bool {
    true
}

/// Accept `10`, `2.5`, `"10"` or `~`; any other value becomes free text.
fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => Some(String::new()),
    })
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            time_limit_minutes: None,
            tick_millis: default_tick_millis(),
        }
    }
}

impl SessionConfig {
    /// Tick period, falling back to one second when set to zero.
    #[must_use]
    pub const fn tick_period(&self) -> Duration {
        if self.tick_millis == 0 {
            Duration::from_millis(default_tick_millis())
        } else {
            Duration::from_millis(self.tick_millis)
        }
    }
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            sound: default_true(),
            keep_awake: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, BreathError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, BreathError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BreathError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            BreathError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Apply command-line session options on top of the file settings.
    pub fn apply_overrides(&mut self, args: &SessionArgs) {
        if let Some(limit) = &args.limit {
            self.session.time_limit_minutes = Some(limit.clone());
        }
        if args.mute {
            self.feedback.sound = false;
        }
        if args.no_keep_awake {
            self.feedback.keep_awake = false;
        }
        if let Some(tick_ms) = args.tick_ms {
            self.session.tick_millis = tick_ms;
        }
    }

    /// Save configuration to a specific path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), BreathError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| BreathError::Config(format!("Failed to serialize config: {e}")))?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                BreathError::Config(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        std::fs::write(path, contents).map_err(|e| {
            BreathError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.session.time_limit_minutes, None);
        assert_eq!(config.session.tick_millis, 1000);
        assert!(config.feedback.sound);
        assert!(config.feedback.keep_awake);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.session.time_limit_minutes = Some("5".to_string());
        config.feedback.keep_awake = false;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
session:
  time_limit_minutes: 10
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Numeric limit should be kept as text
        assert_eq!(config.session.time_limit_minutes.as_deref(), Some("10"));
        // Defaults should be used for missing fields
        assert_eq!(config.session.tick_millis, 1000);
        assert!(config.feedback.sound);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_odd_limit_values_do_not_fail_loading() {
        let config: Config = serde_yaml::from_str("session:\n  time_limit_minutes: soon\n").unwrap();
        assert_eq!(config.session.time_limit_minutes.as_deref(), Some("soon"));

        let config: Config = serde_yaml::from_str("session:\n  time_limit_minutes: ~\n").unwrap();
        assert_eq!(config.session.time_limit_minutes, None);

        let config: Config =
            serde_yaml::from_str("session:\n  time_limit_minutes: [1, 2]\n").unwrap();
        assert_eq!(config.session.time_limit_minutes.as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "session: [unclosed").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, BreathError::Config(_)));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        config.session.time_limit_minutes = Some("10".to_string());

        config.apply_overrides(&SessionArgs::default());
        assert_eq!(config.session.time_limit_minutes.as_deref(), Some("10"));
        assert!(config.feedback.sound);

        config.apply_overrides(&SessionArgs {
            limit: Some("2".to_string()),
            mute: true,
            no_keep_awake: true,
            tick_ms: Some(10),
        });
        assert_eq!(config.session.time_limit_minutes.as_deref(), Some("2"));
        assert!(!config.feedback.sound);
        assert!(!config.feedback.keep_awake);
        assert_eq!(config.session.tick_millis, 10);
    }

    #[test]
    fn test_tick_period() {
        let mut session = SessionConfig::default();
        assert_eq!(session.tick_period(), Duration::from_secs(1));
        session.tick_millis = 0;
        assert_eq!(session.tick_period(), Duration::from_secs(1));
        session.tick_millis = 5;
        assert_eq!(session.tick_period(), Duration::from_millis(5));
    }
}
