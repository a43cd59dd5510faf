//! Incoming conversion: validate and normalize untrusted input.
//!
//! A single recursive descent interprets the schema against the input value.
//! Object results are fully keyed: every declared field appears in the
//! output, `null` where the input had nothing to offer. Unrecognized input
//! keys are rejected. Per-field pipelines run type conversion first, then
//! the field's filters in order — the opposite of the outgoing direction.
//!
//! The first violation aborts the whole call; there is no partial result
//! and no error accumulation.

use serde_json::{Map, Value};

use crate::basic;
use crate::error::{Result, SchemaError};
use crate::path::Path;
use crate::types::{Field, Filter, SchemaNode};

/// Converts untrusted `input` against `schema`, reporting errors relative
/// to the root.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, SchemaNode, incoming};
/// use serde_json::json;
///
/// let schema = SchemaNode::object([
///     Field::new("node", SchemaNode::String),
///     Field::new("user", SchemaNode::array(SchemaNode::String)),
/// ]);
///
/// let value = incoming::convert(&schema, &json!({"user": ["abc", "def"]})).unwrap();
/// assert_eq!(value, json!({"node": null, "user": ["abc", "def"]}));
///
/// let err = incoming::convert(&schema, &json!({"node": 5})).unwrap_err();
/// assert_eq!(err.to_string(), "node: Should be a string");
/// ```
pub fn convert(schema: &SchemaNode, input: &Value) -> Result<Value> {
    let result = convert_at(schema, input, &Path::root());
    if let Err(err) = &result {
        tracing::debug!(error = %err, "incoming conversion rejected");
    }
    result
}

/// Converts `input` against `schema` with errors reported relative to
/// `path`. Entry point for callers embedding the conversion under a known
/// location; [`convert`] is the root-level shorthand.
pub fn convert_at(schema: &SchemaNode, input: &Value, path: &Path) -> Result<Value> {
    match schema {
        SchemaNode::Any => basic::any_type(input, path),
        SchemaNode::String => basic::string_type(input, path),
        SchemaNode::Integer => basic::integer_type(input, path),
        SchemaNode::Number => basic::number_type(input, path),
        SchemaNode::Boolean => basic::boolean_type(input, path),
        SchemaNode::StringMap => basic::string_map(input, path),
        SchemaNode::Object(fields) => convert_object(fields, input, path),
        SchemaNode::Array { element, filters } => convert_array(element, filters, input, path),
        SchemaNode::Either(alternatives) => convert_either(alternatives, input, path),
    }
}

fn convert_object(fields: &[Field], input: &Value, path: &Path) -> Result<Value> {
    let map = match input {
        Value::Null => return Ok(Value::Null),
        Value::Object(map) => map,
        _ => return Err(SchemaError::type_mismatch(path, "Should be an object")),
    };
    let result = collect_object_result(fields, map, path)?;
    check_redundancy(fields, map, path)?;
    Ok(Value::Object(result))
}

fn collect_object_result(
    fields: &[Field],
    input: &Map<String, Value>,
    path: &Path,
) -> Result<Map<String, Value>> {
    let mut result = Map::new();
    for field in fields {
        let raw = input.get(&field.name).unwrap_or(&Value::Null);
        result.insert(field.name.clone(), process_field(field, raw, path)?);
    }
    Ok(result)
}

fn process_field(field: &Field, raw: &Value, parent: &Path) -> Result<Value> {
    let path = parent.child(field.name.as_str());
    let mut value = convert_at(&field.schema, raw, &path)?;
    for filter in &field.filters {
        value = filter.apply(value, &path)?;
    }
    Ok(value)
}

fn check_redundancy(fields: &[Field], input: &Map<String, Value>, path: &Path) -> Result<()> {
    let surplus: Vec<&str> = input
        .keys()
        .map(String::as_str)
        .filter(|key| !fields.iter().any(|field| field.name == *key))
        .collect();
    if surplus.is_empty() {
        return Ok(());
    }
    Err(SchemaError::invalid_value(path, &unrecognized_message(&surplus)))
}

fn unrecognized_message(surplus: &[&str]) -> String {
    if let [single] = surplus {
        return format!("Unrecognized field: {single}");
    }
    format!("Unrecognized fields: {}", surplus.join(", "))
}

fn convert_array(
    element: &SchemaNode,
    filters: &[Filter],
    input: &Value,
    path: &Path,
) -> Result<Value> {
    let items = match input {
        Value::Null => return Ok(Value::Null),
        Value::Array(items) => items,
        _ => return Err(SchemaError::type_mismatch(path, "Should be an array")),
    };
    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = path.child(index);
        let mut value = convert_at(element, item, &item_path)?;
        for filter in filters {
            value = filter.apply(value, &item_path)?;
        }
        result.push(value);
    }
    Ok(Value::Array(result))
}

fn convert_either(alternatives: &[SchemaNode], input: &Value, path: &Path) -> Result<Value> {
    for alternative in alternatives {
        // Both error kinds are suppressed per alternative; only the
        // synthesized failure below ever reaches the caller.
        if let Ok(value) = convert_at(alternative, input, path) {
            return Ok(value);
        }
    }
    Err(SchemaError::invalid_value(path, "Invalid value"))
}
