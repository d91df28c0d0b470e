//! JSON-Schema-subset validation
//!
//! Covers the keywords the plugin's config schema actually uses: `type`,
//! `properties`, `required`, `enum`, `additionalProperties` and `items`.
//! Validation never fails hard; it collects violations for reporting.

use serde_json::Value;

/// One schema violation, with a JSON-pointer-style path into the instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate `instance` against `schema`, collecting all violations.
/// An empty result means the instance conforms.
pub fn validate_instance(schema: &Value, instance: &Value) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();
    check(schema, instance, "$", &mut violations);
    violations
}

fn check(schema: &Value, instance: &Value, path: &str, violations: &mut Vec<SchemaViolation>) {
    let Some(schema_obj) = schema.as_object() else {
        // A non-object schema (e.g. `true`) accepts everything
        return;
    };

    if let Some(expected) = schema_obj.get("type") {
        check_type(expected, instance, path, violations);
    }

    if let Some(allowed) = schema_obj.get("enum").and_then(Value::as_array) {
        if !allowed.contains(instance) {
            violations.push(SchemaViolation {
                path: path.to_string(),
                message: format!(
                    "value {} is not one of the allowed values {}",
                    instance,
                    Value::Array(allowed.clone())
                ),
            });
        }
    }

    if let Some(obj) = instance.as_object() {
        if let Some(required) = schema_obj.get("required").and_then(Value::as_array) {
            for name in required.iter().filter_map(Value::as_str) {
                if !obj.contains_key(name) {
                    violations.push(SchemaViolation {
                        path: path.to_string(),
                        message: format!("missing required property \"{}\"", name),
                    });
                }
            }
        }

        let properties = schema_obj.get("properties").and_then(Value::as_object);
        if let Some(properties) = properties {
            for (name, value) in obj {
                match properties.get(name) {
                    Some(subschema) => {
                        check(subschema, value, &format!("{}.{}", path, name), violations)
                    }
                    None => {
                        if schema_obj.get("additionalProperties") == Some(&Value::Bool(false)) {
                            violations.push(SchemaViolation {
                                path: path.to_string(),
                                message: format!("unknown property \"{}\"", name),
                            });
                        }
                    }
                }
            }
        }
    }

    if let (Some(items), Some(array)) = (schema_obj.get("items"), instance.as_array()) {
        for (index, element) in array.iter().enumerate() {
            check(items, element, &format!("{}[{}]", path, index), violations);
        }
    }
}

fn check_type(expected: &Value, instance: &Value, path: &str, violations: &mut Vec<SchemaViolation>) {
    let matches = |name: &str| match name {
        "object" => instance.is_object(),
        "array" => instance.is_array(),
        "string" => instance.is_string(),
        "boolean" => instance.is_boolean(),
        "integer" => instance.is_i64() || instance.is_u64(),
        "number" => instance.is_number(),
        "null" => instance.is_null(),
        _ => false,
    };

    let ok = match expected {
        Value::String(name) => matches(name),
        // "type": ["string", "null"] style unions
        Value::Array(names) => names
            .iter()
            .filter_map(Value::as_str)
            .any(matches),
        _ => true,
    };

    if !ok {
        violations.push(SchemaViolation {
            path: path.to_string(),
            message: format!("expected type {}, got {}", expected, type_name(instance)),
        });
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
