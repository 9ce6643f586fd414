//! Configuration validator for fileblame
//!
//! Validates configuration values to ensure they are within acceptable ranges.

use super::loader::{Config, ConfigError, ListConfig, LoggingConfig};
pub use crate::session::MAX_LIST_CAPACITY;

/// Most listing calls a single run may issue
pub const MAX_FETCH_ATTEMPTS: u32 = 16;

pub const VALID_LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire configuration
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        Self::validate_list(&config.list)?;
        Self::validate_logging(&config.logging)?;
        Ok(())
    }

    fn validate_list(list: &ListConfig) -> Result<(), ConfigError> {
        if list.capacity == 0 {
            return Err(ConfigError::Invalid(
                "List capacity must be at least 1".to_string(),
            ));
        }

        if list.capacity > MAX_LIST_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "List capacity cannot exceed {}",
                MAX_LIST_CAPACITY
            )));
        }

        if list.max_fetch_attempts == 0 || list.max_fetch_attempts > MAX_FETCH_ATTEMPTS {
            return Err(ConfigError::Invalid(format!(
                "Fetch attempts must be between 1 and {}",
                MAX_FETCH_ATTEMPTS
            )));
        }

        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Invalid log level: {}. Must be one of: {:?}",
                logging.level, VALID_LOG_LEVELS
            )));
        }

        Ok(())
    }
}

/// Validates configuration
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    ConfigValidator::validate(config)
}
