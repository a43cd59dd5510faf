//! Validators: filters that check a constraint and pass the value through.

use json_contract_core::{Filter, Path, SchemaError};
use regex::Regex;
use serde_json::Value;

/// Length of the shapes that have one; `None` leaves the value to the type
/// checkers.
fn value_len(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Rejects `null` with `"Cannot be null"`.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, SchemaNode, incoming};
/// use json_contract_filters::not_null;
/// use serde_json::json;
///
/// let schema = SchemaNode::object([
///     Field::new("event_id", SchemaNode::array(SchemaNode::Integer)).with_filter(not_null()),
/// ]);
/// let err = incoming::convert(&schema, &json!({})).unwrap_err();
/// assert_eq!(err.to_string(), "event_id: Cannot be null");
/// ```
pub fn not_null() -> Filter {
    Filter::new("NotNull", |value, path| {
        if value.is_null() {
            return Err(SchemaError::invalid_value(path, "Cannot be null"));
        }
        Ok(value)
    })
}

/// Rejects `null` and zero-length strings or arrays.
pub fn not_empty() -> Filter {
    Filter::new("NotEmpty", |value, path| {
        if value.is_null() {
            return Err(SchemaError::invalid_value(path, "Cannot be null"));
        }
        if value_len(&value) == Some(0) {
            return Err(SchemaError::invalid_value(path, "Cannot be empty"));
        }
        Ok(value)
    })
}

/// Rejects strings or arrays longer than `limit`.
pub fn max_length(limit: usize) -> Filter {
    Filter::new("MaxLength", move |value, path| {
        if value_len(&value).is_some_and(|len| len > limit) {
            return Err(SchemaError::invalid_value(path, "String is too long"));
        }
        Ok(value)
    })
}

/// Rejects strings or arrays shorter than `limit`.
pub fn min_length(limit: usize) -> Filter {
    Filter::new("MinLength", move |value, path| {
        if value_len(&value).is_some_and(|len| len < limit) {
            return Err(SchemaError::invalid_value(path, "String is too short"));
        }
        Ok(value)
    })
}

/// Rejects lengths outside `low..=high`.
pub fn length_range(low: usize, high: usize) -> Filter {
    Filter::new("LengthRange", move |value, path| {
        if let Some(len) = value_len(&value) {
            if len < low {
                return Err(SchemaError::invalid_value(path, "String is too short"));
            }
            if len > high {
                return Err(SchemaError::invalid_value(path, "String is too long"));
            }
        }
        Ok(value)
    })
}

/// Rejects values not in the allowed set with `"Invalid value"`.
///
/// # Examples
///
/// ```
/// use json_contract_core::Path;
/// use json_contract_filters::only;
/// use serde_json::json;
///
/// let state = only(["active", "closed"]);
/// assert!(state.apply(json!("active"), &Path::root()).is_ok());
/// assert!(state.apply(json!("open"), &Path::root()).is_err());
/// ```
pub fn only<I>(options: I) -> Filter
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let options: Vec<Value> = options.into_iter().map(Into::into).collect();
    Filter::new("Only", move |value, path| {
        if value.is_null() || options.contains(&value) {
            return Ok(value);
        }
        Err(SchemaError::invalid_value(path, "Invalid value"))
    })
}

fn check_number(
    value: Value,
    path: &Path,
    reject: impl Fn(f64) -> Option<&'static str>,
) -> Result<Value, SchemaError> {
    if let Some(n) = value.as_f64() {
        if let Some(message) = reject(n) {
            return Err(SchemaError::invalid_value(path, message));
        }
    }
    Ok(value)
}

/// Rejects numbers below `low` with `"Value is too small"`.
pub fn minimum(low: f64) -> Filter {
    Filter::new("Minimum", move |value, path| {
        check_number(value, path, |n| (n < low).then_some("Value is too small"))
    })
}

/// Rejects numbers at or below `low`.
pub fn exclusive_minimum(low: f64) -> Filter {
    Filter::new("ExclusiveMinimum", move |value, path| {
        check_number(value, path, |n| (n <= low).then_some("Value is too small"))
    })
}

/// Rejects numbers above `high` with `"Value is too large"`.
pub fn maximum(high: f64) -> Filter {
    Filter::new("Maximum", move |value, path| {
        check_number(value, path, |n| (n > high).then_some("Value is too large"))
    })
}

/// Rejects numbers at or above `high`.
pub fn exclusive_maximum(high: f64) -> Filter {
    Filter::new("ExclusiveMaximum", move |value, path| {
        check_number(value, path, |n| (n >= high).then_some("Value is too large"))
    })
}

/// Rejects numbers outside `low..=high`.
pub fn range(low: f64, high: f64) -> Filter {
    Filter::new("Range", move |value, path| {
        check_number(value, path, |n| {
            if n < low {
                return Some("Value is too small");
            }
            (n > high).then_some("Value is too large")
        })
    })
}

/// Rejects strings not matching `regex` with `"Pattern not match"`.
///
/// Non-string values pass through; pair with a `String`-typed field.
///
/// # Examples
///
/// ```
/// use json_contract_core::Path;
/// use json_contract_filters::pattern;
/// use regex::Regex;
/// use serde_json::json;
///
/// let hex = pattern(Regex::new("^[0-9a-f]+$").unwrap());
/// assert!(hex.apply(json!("1f2e"), &Path::root()).is_ok());
/// assert!(hex.apply(json!("xyz"), &Path::root()).is_err());
/// ```
pub fn pattern(regex: Regex) -> Filter {
    Filter::new("Pattern", move |value, path| {
        if let Value::String(s) = &value {
            if !regex.is_match(s) {
                return Err(SchemaError::invalid_value(path, "Pattern not match"));
            }
        }
        Ok(value)
    })
}
