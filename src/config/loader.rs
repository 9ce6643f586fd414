//! Configuration loader for fileblame
//!
//! Handles loading configuration from TOML files and merging with defaults.

use super::defaults::default_config;
use crate::session::{ListPolicy, TruncationPolicy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "fileblame.toml";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_list")]
    pub list: ListConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingConfig,
}

/// Process listing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default = "default_truncation")]
    pub truncation: TruncationPolicy,
    #[serde(default = "default_max_fetch_attempts")]
    pub max_fetch_attempts: u32,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Config {
    /// The listing policy this configuration describes
    pub fn list_policy(&self) -> ListPolicy {
        ListPolicy {
            capacity: self.list.capacity,
            truncation: self.list.truncation,
            max_fetch_attempts: self.list.max_fetch_attempts,
        }
    }
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration or returns defaults if file doesn't exist
    pub fn load_or_default(&self) -> Result<Config, ConfigError> {
        match self.load() {
            Err(ConfigError::FileNotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

}

/// Loads configuration from the default location.
///
/// A missing file yields the defaults; an unreadable or malformed one
/// is an error.
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new(DEFAULT_CONFIG_FILE).load_or_default()
}

// Default functions for serde
fn default_list() -> ListConfig {
    let defaults = default_config();
    ListConfig {
        capacity: defaults.list.capacity,
        truncation: defaults.list.truncation,
        max_fetch_attempts: defaults.list.max_fetch_attempts,
    }
}

fn default_logging() -> LoggingConfig {
    LoggingConfig {
        level: default_config().logging.level,
    }
}

fn default_capacity() -> usize {
    default_config().list.capacity
}

fn default_truncation() -> TruncationPolicy {
    default_config().list.truncation
}

fn default_max_fetch_attempts() -> u32 {
    default_config().list.max_fetch_attempts
}

fn default_log_level() -> String {
    default_config().logging.level
}

impl Default for Config {
    fn default() -> Self {
        Config {
            list: default_list(),
            logging: default_logging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.list.capacity, 10);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.list_policy(), ListPolicy::default());
    }

    #[test]
    fn test_load_missing_file() {
        let loader = ConfigLoader::new("nonexistent.toml");
        let result = loader.load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let loader = ConfigLoader::new("nonexistent.toml");
        let config = loader.load_or_default().unwrap();
        assert_eq!(config.list.capacity, 10);
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("broken.toml");
        fs::write(&config_path, "[list\ncapacity = ").unwrap();

        let result = ConfigLoader::new(&config_path).load_or_default();
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");
        fs::write(&config_path, "[list]\ncapacity = 32\n").unwrap();

        let loaded = ConfigLoader::new(&config_path).load().unwrap();
        assert_eq!(loaded.list.capacity, 32);
        assert_eq!(loaded.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
            [list]
            truncation = "fetch-all"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.list.truncation, TruncationPolicy::FetchAll);
        // Check defaults are applied
        assert_eq!(config.list.capacity, 10);
        assert_eq!(config.list.max_fetch_attempts, 4);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_unknown_truncation_policy() {
        let toml_str = r#"
            [list]
            truncation = "sometimes"
        "#;
        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
