//! Tests for the JSON-Schema-subset validator

use serde_json::json;

use crate::config::validate_instance;

fn config_schema() -> serde_json::Value {
    serde_json::from_str(include_str!("../../../schema/config.schema.json")).unwrap()
}

#[test]
fn test_conforming_example_passes() {
    let example: serde_json::Value =
        serde_json::from_str(include_str!("../../../schema/config.example.json")).unwrap();

    let violations = validate_instance(&config_schema(), &example);
    assert!(violations.is_empty(), "unexpected violations: {:?}", violations);
}

#[test]
fn test_empty_section_passes() {
    let instance = json!({ "warcraft-notify": {} });
    assert!(validate_instance(&config_schema(), &instance).is_empty());
}

#[test]
fn test_wrong_type_reported_with_path() {
    let instance = json!({ "warcraft-notify": { "soundsDir": 42 } });

    let violations = validate_instance(&config_schema(), &instance);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "$.warcraft-notify.soundsDir");
    assert!(violations[0].message.contains("expected type"));
}

#[test]
fn test_faction_enum_enforced() {
    let instance = json!({ "warcraft-notify": { "faction": "murlocs" } });

    let violations = validate_instance(&config_schema(), &instance);
    assert!(!violations.is_empty());
    assert!(violations[0].message.contains("allowed values"));
}

#[test]
fn test_unknown_property_rejected() {
    let instance = json!({ "warcraft-notify": { "factoin": "horde" } });

    let violations = validate_instance(&config_schema(), &instance);
    assert!(!violations.is_empty());
    assert!(violations[0].message.contains("unknown property"));
}

#[test]
fn test_required_properties_reported() {
    let schema = json!({
        "type": "object",
        "required": ["title"],
        "properties": { "title": { "type": "string" } }
    });

    let violations = validate_instance(&schema, &json!({}));
    assert_eq!(violations.len(), 1);
    assert!(violations[0].message.contains("missing required property"));
}

#[test]
fn test_type_union_accepts_either() {
    let schema = json!({ "type": ["string", "null"] });
    assert!(validate_instance(&schema, &json!(null)).is_empty());
    assert!(validate_instance(&schema, &json!("hi")).is_empty());
    assert!(!validate_instance(&schema, &json!(1)).is_empty());
}

#[test]
fn test_array_items_checked_elementwise() {
    let schema = json!({ "type": "array", "items": { "type": "integer" } });

    let violations = validate_instance(&schema, &json!([1, "two", 3]));
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "$[1]");
}

#[test]
fn test_multiple_violations_all_collected() {
    let instance = json!({
        "warcraft-notify": {
            "soundsDir": 42,
            "showDescriptionInToast": "yes"
        }
    });

    let violations = validate_instance(&config_schema(), &instance);
    assert_eq!(violations.len(), 2);
}
