//! Tests for the configuration shape and defaults

use crate::config::{NotificationConfig, PLUGIN_KEY};
use crate::sounds::api::FactionFilter;

#[test]
fn test_empty_config_has_all_fields_unset() {
    let config: NotificationConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.sounds_dir, None);
    assert_eq!(config.faction, None);
    assert_eq!(config.show_description_in_toast, None);
}

#[test]
fn test_defaults_applied_on_resolve() {
    let resolved = NotificationConfig::default().resolve();
    assert_eq!(resolved.faction, FactionFilter::Both);
    assert!(!resolved.show_description_in_toast);
    assert!(resolved.sounds_dir.ends_with("sounds"));
}

#[test]
fn test_explicit_fields_survive_resolve() {
    let config: NotificationConfig = serde_json::from_str(
        r#"{"soundsDir": "/tmp/sounds", "faction": "horde", "showDescriptionInToast": true}"#,
    )
    .unwrap();

    let resolved = config.resolve();
    assert_eq!(resolved.sounds_dir.to_str(), Some("/tmp/sounds"));
    assert_eq!(resolved.faction, FactionFilter::Horde);
    assert!(resolved.show_description_in_toast);
}

#[test]
fn test_unknown_fields_rejected() {
    let result: Result<NotificationConfig, _> =
        serde_json::from_str(r#"{"soundDir": "/tmp/typo"}"#);
    assert!(result.is_err());
}

#[test]
fn test_invalid_faction_value_rejected() {
    let result: Result<NotificationConfig, _> =
        serde_json::from_str(r#"{"faction": "night-elves"}"#);
    assert!(result.is_err());
}

#[test]
fn test_plugin_key_is_stable() {
    // The host keys config sections by plugin name; renaming breaks users
    assert_eq!(PLUGIN_KEY, "warcraft-notify");
}
