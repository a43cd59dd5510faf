//! Outgoing conversion: filter and reshape internal data for external use.
//!
//! Same recursive dispatch as the incoming direction, with two deliberate
//! asymmetries. Filters run on the raw value *before* type conversion, so a
//! representation-changing filter (say, stringifying an id) can satisfy a
//! type check that would otherwise reject the raw value. And object output
//! is sparse: a field resolving to `null` is omitted entirely instead of
//! being written as a placeholder.
//!
//! There is no unrecognized-field check on the way out; input keys the
//! schema does not mention are silently left behind. `Either` has no
//! outgoing interpretation — internal data already carries a concrete
//! shape, so an `Either` node in an outgoing schema is an authoring error.

use serde_json::{Map, Value};

use crate::basic;
use crate::error::{Result, SchemaError};
use crate::path::Path;
use crate::types::{Field, Filter, SchemaNode};

/// Converts internal `input` against `schema` for external output.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, SchemaNode, outgoing};
/// use serde_json::json;
///
/// let schema = SchemaNode::object([
///     Field::new("node", SchemaNode::String),
///     Field::new("tag", SchemaNode::object([
///         Field::new("name", SchemaNode::String),
///         Field::new("level", SchemaNode::Integer),
///     ])),
/// ]);
///
/// // Sparse output: fields resolving to null are omitted entirely.
/// let value = outgoing::convert(&schema, &json!({"tag": {"name": "abc"}})).unwrap();
/// assert_eq!(value, json!({"tag": {"name": "abc"}}));
/// ```
pub fn convert(schema: &SchemaNode, input: &Value) -> Result<Value> {
    let result = convert_at(schema, input, &Path::root());
    if let Err(err) = &result {
        tracing::debug!(error = %err, "outgoing conversion rejected");
    }
    result
}

/// Converts `input` against `schema` with errors reported relative to
/// `path`.
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
        SchemaNode::Either(_) => {
            Err(SchemaError::invalid_value(path, "Either is not supported"))
        }
    }
}

fn convert_object(fields: &[Field], input: &Value, path: &Path) -> Result<Value> {
    let map = match input {
        Value::Null => return Ok(Value::Null),
        Value::Object(map) => map,
        _ => return Err(SchemaError::type_mismatch(path, "Should be an object")),
    };
    let mut result = Map::new();
    for field in fields {
        let raw = map.get(&field.name).unwrap_or(&Value::Null);
        let value = process_field(field, raw, path)?;
        if !value.is_null() {
            result.insert(field.name.clone(), value);
        }
    }
    Ok(Value::Object(result))
}

fn process_field(field: &Field, raw: &Value, parent: &Path) -> Result<Value> {
    let path = parent.child(field.name.as_str());
    let mut value = raw.clone();
    for filter in &field.filters {
        value = filter.apply(value, &path)?;
    }
    convert_at(&field.schema, &value, &path)
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
        let mut value = item.clone();
        for filter in filters {
            value = filter.apply(value, &item_path)?;
        }
        result.push(convert_at(element, &value, &item_path)?);
    }
    Ok(Value::Array(result))
}
