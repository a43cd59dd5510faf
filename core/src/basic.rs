//! Basic type checkers for primitive schema leaves.
//!
//! Each checker is a pure function `(value, path) -> Result<Value>`. A
//! `Value::Null` input converts to `Value::Null` for every checker, before
//! any type test runs; non-null input either passes through unchanged or
//! fails with a shape error at `path`.
//!
//! Booleans are deliberately excluded from the numeric checks. The
//! `serde_json` value model keeps booleans in their own variant, so the
//! integer/boolean conflation some dynamic runtimes suffer from cannot
//! occur here; the checks below stay explicit about it all the same.

use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::path::Path;

/// Identity: returns the input unchanged, nested structure included.
pub fn any_type(value: &Value, _path: &Path) -> Result<Value> {
    Ok(value.clone())
}

/// Accepts textual values only.
pub fn string_type(value: &Value, path: &Path) -> Result<Value> {
    match value {
        Value::Null | Value::String(_) => Ok(value.clone()),
        _ => Err(SchemaError::type_mismatch(path, "Should be a string")),
    }
}

/// Accepts whole numbers; floats and booleans are rejected.
pub fn integer_type(value: &Value, path: &Path) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(value.clone()),
        _ => Err(SchemaError::type_mismatch(path, "Should be an integer")),
    }
}

/// Accepts integer or floating-point numbers; booleans are rejected.
pub fn number_type(value: &Value, path: &Path) -> Result<Value> {
    match value {
        Value::Null | Value::Number(_) => Ok(value.clone()),
        _ => Err(SchemaError::type_mismatch(path, "Should be a number")),
    }
}

/// Accepts strictly boolean values.
pub fn boolean_type(value: &Value, path: &Path) -> Result<Value> {
    match value {
        Value::Null | Value::Bool(_) => Ok(value.clone()),
        _ => Err(SchemaError::type_mismatch(path, "Should be a boolean")),
    }
}

/// Accepts an open-keyed mapping whose values are all strings.
///
/// A non-string entry fails at `path + [key]`, not at the map itself.
pub fn string_map(value: &Value, path: &Path) -> Result<Value> {
    let map = match value {
        Value::Null => return Ok(Value::Null),
        Value::Object(map) => map,
        _ => return Err(SchemaError::type_mismatch(path, "Should be an object")),
    };
    for (key, entry) in map {
        if !entry.is_string() {
            let entry_path = path.child(key.as_str());
            return Err(SchemaError::type_mismatch(&entry_path, "Should be a string"));
        }
    }
    Ok(value.clone())
}
