//! Tests for JSON config loading

use std::io::Write;

use crate::config::{load_config, ConfigError};
use crate::sounds::api::FactionFilter;

fn write_temp_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_extracts_plugin_section() {
    let file = write_temp_config(
        r#"{"some-other-plugin": {}, "warcraft-notify": {"faction": "alliance"}}"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.faction, Some(FactionFilter::Alliance));
    assert_eq!(config.sounds_dir, None);
}

#[test]
fn test_load_config_missing_section() {
    let file = write_temp_config(r#"{"some-other-plugin": {}}"#);

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey { .. }));
}

#[test]
fn test_load_config_invalid_json() {
    let file = write_temp_config("{not json");

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
