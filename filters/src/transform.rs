//! Value-transforming filters.

use chrono::DateTime;
use json_contract_core::{Filter, SchemaError};
use serde_json::Value;

/// Strips leading and trailing whitespace from string values.
///
/// Non-string values pass through unchanged.
pub fn trim() -> Filter {
    Filter::new("Trim", |value, _path| {
        Ok(match value {
            Value::String(s) => Value::String(s.trim().to_string()),
            other => other,
        })
    })
}

/// Converts scalar values to their textual form.
///
/// Mostly useful on the outgoing side, where it runs before the type
/// conversion and lets a numeric internal id satisfy a `String` field.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, SchemaNode, outgoing};
/// use json_contract_filters::to_string;
/// use serde_json::json;
///
/// let schema = SchemaNode::object([
///     Field::new("object_id", SchemaNode::String).with_filter(to_string()),
/// ]);
/// let value = outgoing::convert(&schema, &json!({"object_id": 56})).unwrap();
/// assert_eq!(value, json!({"object_id": "56"}));
/// ```
pub fn to_string() -> Filter {
    Filter::new("ToString", |value, _path| {
        Ok(match value {
            Value::Null => Value::Null,
            Value::String(_) => value,
            Value::Number(n) => Value::String(n.to_string()),
            Value::Bool(b) => Value::String(b.to_string()),
            other => Value::String(other.to_string()),
        })
    })
}

/// Parses an RFC 3339 timestamp string into epoch milliseconds.
///
/// Numeric input is taken to already be epoch milliseconds and passes
/// through unchanged. Anything unparseable fails with `"Invalid value"`.
pub fn to_timestamp() -> Filter {
    Filter::new("ToTimestamp", |value, path| match &value {
        Value::Null | Value::Number(_) => Ok(value),
        Value::String(s) => match DateTime::parse_from_rfc3339(s) {
            Ok(instant) => Ok(Value::from(instant.timestamp_millis())),
            Err(_) => Err(SchemaError::invalid_value(path, "Invalid value")),
        },
        _ => Err(SchemaError::invalid_value(path, "Invalid value")),
    })
}
