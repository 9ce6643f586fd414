//! Configuration module for fileblame
//!
//! Provides configuration loading, validation, and default settings.
//! Only the list buffer and logging are configurable; the report
//! itself takes nothing but the file path.

mod defaults;
mod loader;
mod validator;

pub use defaults::{default_config, ConfigDefaults};
pub use loader::{load_config, ConfigLoader, DEFAULT_CONFIG_FILE};
pub use validator::{validate_config, ConfigValidator, MAX_FETCH_ATTEMPTS, MAX_LIST_CAPACITY};

pub use loader::{Config, ListConfig, LoggingConfig};

pub use loader::ConfigError;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load the configuration from the working directory and validate it
pub fn load_validated() -> ConfigResult<Config> {
    let config = load_config()?;
    validate_config(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_exports() {
        let _defaults = default_config();
        let loader = ConfigLoader::new("test.toml");
        assert_eq!(loader.path(), std::path::Path::new("test.toml"));

        let error_result: ConfigResult<String> = Err(ConfigError::Invalid("test".to_string()));
        assert!(error_result.is_err());
    }

    #[test]
    fn test_config_error_from_io() {
        use std::io;
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_error: ConfigError = io_error.into();
        assert!(matches!(config_error, ConfigError::Io(_)));
    }
}
