//! Default configuration values for fileblame

use crate::session::{TruncationPolicy, DEFAULT_LIST_CAPACITY};
use serde::{Deserialize, Serialize};

/// Default configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigDefaults {
    pub list: ListDefaults,
    pub logging: LoggingDefaults,
}

/// Default process listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDefaults {
    pub capacity: usize,
    pub truncation: TruncationPolicy,
    pub max_fetch_attempts: u32,
}

/// Default logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingDefaults {
    pub level: String,
}

/// Returns the default configuration
pub fn default_config() -> ConfigDefaults {
    ConfigDefaults {
        list: ListDefaults {
            capacity: DEFAULT_LIST_CAPACITY,
            truncation: TruncationPolicy::Report,
            max_fetch_attempts: 4,
        },
        logging: LoggingDefaults {
            level: "warn".to_string(),
        },
    }
}
