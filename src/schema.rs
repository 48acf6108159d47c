//! Argument validation against tool input schemas
//!
//! Validates an invocation's argument object against the JSON-Schema-style
//! object description a tool advertises, and produces the argument object
//! handlers actually receive: required properties checked, declared types and
//! enum members enforced, declared defaults filled in. Argument names that a
//! schema does not declare pass through untouched.

use serde_json::{Map, Value};
use thiserror::Error;

/// Argument validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(String),
    #[error("type mismatch for '{name}': expected {expected}, got {actual}")]
    TypeMismatch {
        name: String,
        expected: String,
        actual: String,
    },
    #[error("value for '{name}' out of range: {detail}")]
    OutOfRange { name: String, detail: String },
    #[error("arguments must be a JSON object, got {0}")]
    InvalidArguments(String),
    #[error("invalid input schema: {0}")]
    InvalidSchema(String),
}

/// Validate `arguments` against `schema` and return the object the handler
/// should run with, with declared defaults filled in for absent properties.
///
/// A `null` arguments value is treated as the empty object.
pub fn validate(schema: &Value, arguments: &Value) -> Result<Value, ValidationError> {
    let mut args = match arguments {
        Value::Null => Map::new(),
        Value::Object(map) => map.clone(),
        other => return Err(ValidationError::InvalidArguments(type_name(other).to_string())),
    };

    let no_properties = Map::new();
    let properties = match schema.get("properties") {
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(ValidationError::InvalidSchema(format!(
                "'properties' must be an object, got {}",
                type_name(other)
            )))
        }
        None => &no_properties,
    };

    if let Some(required) = schema.get("required").and_then(Value::as_array) {
        for name in required.iter().filter_map(Value::as_str) {
            if !args.contains_key(name) {
                return Err(ValidationError::MissingRequiredArgument(name.to_string()));
            }
        }
    }

    for (name, declaration) in properties {
        match args.get(name) {
            Some(value) => check_property(name, declaration, value)?,
            None => {
                if let Some(default) = declaration.get("default") {
                    args.insert(name.clone(), default.clone());
                }
            }
        }
    }

    Ok(Value::Object(args))
}

/// Check one present argument value against its declared property schema.
fn check_property(name: &str, declaration: &Value, value: &Value) -> Result<(), ValidationError> {
    if let Some(allowed) = declaration.get("enum").and_then(Value::as_array) {
        if !allowed.contains(value) {
            let members: Vec<String> = allowed.iter().map(render_value).collect();
            return Err(ValidationError::TypeMismatch {
                name: name.to_string(),
                expected: format!("one of [{}]", members.join(", ")),
                actual: render_value(value),
            });
        }
        return Ok(());
    }

    if let Some(expected) = declaration.get("type").and_then(Value::as_str) {
        let matches = match expected {
            "string" => value.is_string(),
            "number" => value.is_number(),
            "integer" => value.is_i64() || value.is_u64(),
            "boolean" => value.is_boolean(),
            "object" => value.is_object(),
            "array" => value.is_array(),
            other => {
                return Err(ValidationError::InvalidSchema(format!(
                    "unsupported type '{other}' for property '{name}'"
                )))
            }
        };
        if !matches {
            return Err(ValidationError::TypeMismatch {
                name: name.to_string(),
                expected: expected.to_string(),
                actual: type_name(value).to_string(),
            });
        }
    }

    if let Some(number) = value.as_f64() {
        if let Some(min) = declaration.get("minimum").and_then(Value::as_f64) {
            if number < min {
                return Err(ValidationError::OutOfRange {
                    name: name.to_string(),
                    detail: format!("{number} is below minimum {min}"),
                });
            }
        }
        if let Some(max) = declaration.get("maximum").and_then(Value::as_f64) {
            if number > max {
                return Err(ValidationError::OutOfRange {
                    name: name.to_string(),
                    detail: format!("{number} exceeds maximum {max}"),
                });
            }
        }
    }

    Ok(())
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

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn search_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query string"
                },
                "count": {
                    "type": "number",
                    "description": "Number of results to return",
                    "default": 5,
                    "minimum": 1,
                    "maximum": 10
                },
                "country": {
                    "type": "string",
                    "description": "2-letter country code"
                }
            },
            "required": ["query"]
        })
    }

    #[test]
    fn test_missing_required_argument() {
        let result = validate(&search_schema(), &json!({}));
        assert_eq!(
            result,
            Err(ValidationError::MissingRequiredArgument("query".to_string()))
        );
    }

    #[test]
    fn test_defaults_filled_for_absent_properties() {
        let validated = validate(&search_schema(), &json!({"query": "x"})).unwrap();
        assert_eq!(validated, json!({"query": "x", "count": 5}));
    }

    #[test]
    fn test_explicit_value_wins_over_default() {
        let validated = validate(&search_schema(), &json!({"query": "x", "count": 3})).unwrap();
        assert_eq!(validated["count"], 3);
    }

    #[test]
    fn test_type_mismatch() {
        let result = validate(&search_schema(), &json!({"query": 42}));
        assert_eq!(
            result,
            Err(ValidationError::TypeMismatch {
                name: "query".to_string(),
                expected: "string".to_string(),
                actual: "number".to_string(),
            })
        );
    }

    #[test]
    fn test_enum_member_enforced() {
        let schema = json!({
            "type": "object",
            "properties": {
                "extractMode": {
                    "type": "string",
                    "enum": ["markdown", "text"],
                    "default": "markdown"
                }
            },
            "required": []
        });

        assert!(validate(&schema, &json!({"extractMode": "text"})).is_ok());

        let result = validate(&schema, &json!({"extractMode": "html"}));
        assert!(matches!(result, Err(ValidationError::TypeMismatch { .. })));
    }

    #[test]
    fn test_numeric_range_enforced() {
        let below = validate(&search_schema(), &json!({"query": "x", "count": 0}));
        assert!(matches!(below, Err(ValidationError::OutOfRange { .. })));

        let above = validate(&search_schema(), &json!({"query": "x", "count": 11}));
        assert!(matches!(above, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_unknown_arguments_pass_through() {
        let validated =
            validate(&search_schema(), &json!({"query": "x", "extra": true})).unwrap();
        assert_eq!(validated["extra"], true);
    }

    #[test]
    fn test_null_arguments_treated_as_empty_object() {
        let schema = json!({
            "type": "object",
            "properties": {
                "count": {"type": "number", "default": 5}
            },
            "required": []
        });

        let validated = validate(&schema, &Value::Null).unwrap();
        assert_eq!(validated, json!({"count": 5}));
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let result = validate(&search_schema(), &json!([1, 2]));
        assert_eq!(
            result,
            Err(ValidationError::InvalidArguments("array".to_string()))
        );
    }
}
