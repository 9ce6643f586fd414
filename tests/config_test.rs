//! Configuration feeding the report pipeline

use fileblame::config::{validate_config, Config, ConfigError, ConfigLoader};
use fileblame::{ListPolicy, TruncationPolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_file_sets_list_policy() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fileblame.toml");
    fs::write(
        &path,
        r#"
            [list]
            capacity = 64
            truncation = "fetch-all"
            max_fetch_attempts = 2

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    let config = ConfigLoader::new(&path).load().unwrap();
    assert!(validate_config(&config).is_ok());
    assert_eq!(
        config.list_policy(),
        ListPolicy {
            capacity: 64,
            truncation: TruncationPolicy::FetchAll,
            max_fetch_attempts: 2,
        }
    );
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_empty_file_is_all_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fileblame.toml");
    fs::write(&path, "").unwrap();

    let config = ConfigLoader::new(&path).load().unwrap();
    assert_eq!(config.list_policy(), Config::default().list_policy());
}

#[test]
fn test_out_of_range_capacity_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fileblame.toml");
    fs::write(&path, "[list]\ncapacity = 5000\n").unwrap();

    let config = ConfigLoader::new(&path).load().unwrap();
    assert!(matches!(
        validate_config(&config),
        Err(ConfigError::Invalid(_))
    ));
}
