//! Tests for applying command-line overrides

use crate::cli::Settings;
use dirsense_core::AppConfig;
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_empty_settings_keep_config() {
    let config = AppConfig::new("key")
        .with_model("base-model")
        .with_memory_file("base.json");

    let applied = Settings::default().apply(config);

    assert_eq!(applied.model, "base-model");
    assert_eq!(applied.memory_file, PathBuf::from("base.json"));
}

#[test]
fn test_settings_override_config() {
    let settings = Settings {
        memory_file: Some(PathBuf::from("override.json")),
        snippet_max_chars: Some(250),
        model: Some("override-model".to_string()),
        timeout_secs: Some(5),
    };

    let applied = settings.apply(AppConfig::new("key"));

    assert_eq!(applied.api_key, "key");
    assert_eq!(applied.memory_file, PathBuf::from("override.json"));
    assert_eq!(applied.snippet_max_chars, 250);
    assert_eq!(applied.model, "override-model");
    assert_eq!(applied.generation_timeout, Duration::from_secs(5));
}

#[test]
#[serial]
fn test_memory_file_prefers_flag_over_env() {
    std::env::set_var("DIRSENSE_MEMORY_FILE", "/from/env.json");

    let from_flag = Settings {
        memory_file: Some(PathBuf::from("/from/flag.json")),
        ..Settings::default()
    }
    .memory_file();
    let from_env = Settings::default().memory_file();
    std::env::remove_var("DIRSENSE_MEMORY_FILE");

    assert_eq!(from_flag, PathBuf::from("/from/flag.json"));
    assert_eq!(from_env, PathBuf::from("/from/env.json"));
}
