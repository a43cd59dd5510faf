//! Schema-guided reads from a data tree.
//!
//! The getter walks a `(schema node, data value)` pair one path segment at a
//! time. Schema violations in the path itself (unknown field, non-integer
//! index, descending below a leaf) are errors, but an absent or `null`
//! subtree short-circuits the whole remaining path to `None` instead of
//! failing — reads are tolerant of sparse data, writes are not.

use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::path::PathSegment;
use crate::types::{SchemaNode, find_field};

// Leaf node handed out for string-map entries, which are always strings.
static STRING_LEAF: SchemaNode = SchemaNode::String;

/// Resolves `path` from `root` under `schema`.
///
/// Returns `Ok(None)` when any step of the path lands on an absent or
/// `null` value; the remaining segments are not validated against the data
/// (they are still validated against the schema up to the point of
/// absence).
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, SchemaNode, get};
/// use serde_json::json;
///
/// let schema = SchemaNode::object([
///     Field::new("tag", SchemaNode::object([Field::new("level", SchemaNode::Integer)])),
/// ]);
/// let data = json!({"tag": {"level": 10}});
///
/// let level = get(&schema, &["tag".into(), "level".into()], &data).unwrap();
/// assert_eq!(level, Some(&json!(10)));
///
/// // Absent subtree resolves to None rather than an error.
/// let sparse = json!({});
/// let missing = get(&schema, &["tag".into(), "level".into()], &sparse).unwrap();
/// assert_eq!(missing, None);
/// ```
pub fn get<'v>(
    schema: &SchemaNode,
    path: &[PathSegment],
    root: &'v Value,
) -> Result<Option<&'v Value>> {
    let mut node = schema;
    let mut value = root;
    for segment in path {
        match node {
            SchemaNode::Object(fields) => {
                let name = segment.to_string();
                let field = find_field(fields, &name).ok_or_else(|| {
                    SchemaError::InvalidValue(format!("Unrecognized field: {name}"))
                })?;
                match value.get(&field.name) {
                    Some(child) if !child.is_null() => {
                        node = &field.schema;
                        value = child;
                    }
                    _ => return Ok(None),
                }
            }
            SchemaNode::Array { element, .. } => {
                let index = segment_index(segment)?;
                match value.get(index) {
                    Some(child) if !child.is_null() => {
                        node = element;
                        value = child;
                    }
                    _ => return Ok(None),
                }
            }
            SchemaNode::StringMap => {
                // Map keys are open; the entry itself is a string leaf.
                match value.get(segment.to_string()) {
                    Some(child) if !child.is_null() => {
                        node = &STRING_LEAF;
                        value = child;
                    }
                    _ => return Ok(None),
                }
            }
            _ => return Err(SchemaError::InvalidValue("Path is too long".to_string())),
        }
    }
    if value.is_null() {
        return Ok(None);
    }
    Ok(Some(value))
}

/// Interprets a path segment as an array index, coercing numeric keys.
pub(crate) fn segment_index(segment: &PathSegment) -> Result<usize> {
    match segment {
        PathSegment::Index(index) => Ok(*index),
        PathSegment::Key(key) => key
            .parse::<usize>()
            .map_err(|_| SchemaError::TypeMismatch("Index should be integer".to_string())),
    }
}
