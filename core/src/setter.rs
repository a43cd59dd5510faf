//! Schema-guided writes into a data tree.
//!
//! The setter walks the same `(schema node, data value)` state machine as
//! the getter, but it mutates the caller's value in place: missing
//! intermediate containers are created (`{}` for objects and string maps,
//! `[]` for arrays) and arrays are padded with `null` up to the target
//! index. Unlike the getter, schema/data mismatches are propagated eagerly
//! at the step where they are discovered.

use serde_json::{Map, Value};

use crate::error::{Result, SchemaError};
use crate::getter::segment_index;
use crate::path::PathSegment;
use crate::types::{Field, SchemaNode, find_field};

/// Writes `value` at `path` under `root`, creating intermediate containers
/// as needed.
///
/// The root itself can never be replaced: an empty path fails with
/// `"Cannot set itself"`.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, SchemaNode, set};
/// use serde_json::json;
///
/// let schema = SchemaNode::object([
///     Field::new("tag", SchemaNode::object([Field::new("level", SchemaNode::Integer)])),
/// ]);
/// let mut data = json!({});
///
/// set(&schema, &["tag".into(), "level".into()], &mut data, json!(7)).unwrap();
/// assert_eq!(data, json!({"tag": {"level": 7}}));
/// ```
pub fn set(
    schema: &SchemaNode,
    path: &[PathSegment],
    root: &mut Value,
    value: Value,
) -> Result<()> {
    let Some((last, walk)) = path.split_last() else {
        return Err(SchemaError::InvalidValue("Cannot set itself".to_string()));
    };
    let mut node = schema;
    let mut current = root;
    for segment in walk {
        let (next_node, next_value) = match node {
            SchemaNode::Object(fields) => walk_object_field(fields, current, segment)?,
            SchemaNode::Array { element, .. } => walk_array_field(element, current, segment)?,
            _ => return Err(SchemaError::InvalidValue("Path is too long".to_string())),
        };
        node = next_node;
        current = next_value;
    }
    set_field(node, current, last, value)
}

fn walk_object_field<'a>(
    fields: &'a [Field],
    current: &'a mut Value,
    segment: &PathSegment,
) -> Result<(&'a SchemaNode, &'a mut Value)> {
    let name = segment.to_string();
    let field = find_field(fields, &name)
        .ok_or_else(|| SchemaError::InvalidValue(format!("Unrecognized field: {name}")))?;
    ensure_walkable(&field.schema)?;
    let map = as_object_mut(current)?;
    let slot = map.entry(field.name.clone()).or_insert(Value::Null);
    if slot.is_null() {
        *slot = empty_container(&field.schema);
    }
    Ok((&field.schema, slot))
}

fn walk_array_field<'a>(
    element: &'a SchemaNode,
    current: &'a mut Value,
    segment: &PathSegment,
) -> Result<(&'a SchemaNode, &'a mut Value)> {
    let index = segment_index(segment)?;
    ensure_walkable(element)?;
    let items = as_array_mut(current)?;
    if items.len() <= index {
        items.resize(index + 1, Value::Null);
    }
    let slot = &mut items[index];
    if slot.is_null() {
        *slot = empty_container(element);
    }
    Ok((element, slot))
}

fn set_field(
    node: &SchemaNode,
    current: &mut Value,
    segment: &PathSegment,
    value: Value,
) -> Result<()> {
    match node {
        SchemaNode::Object(fields) => {
            let name = segment.to_string();
            let field = find_field(fields, &name)
                .ok_or_else(|| SchemaError::InvalidValue(format!("Unrecognized field: {name}")))?;
            as_object_mut(current)?.insert(field.name.clone(), value);
        }
        SchemaNode::Array { .. } => {
            let index = segment_index(segment)?;
            let items = as_array_mut(current)?;
            if items.len() <= index {
                items.resize(index + 1, Value::Null);
            }
            items[index] = value;
        }
        SchemaNode::StringMap => {
            as_object_mut(current)?.insert(segment.to_string(), value);
        }
        _ => return Err(SchemaError::InvalidValue("Path is too long".to_string())),
    }
    Ok(())
}

/// Only containers can be walked through; anything else ends the path.
fn ensure_walkable(node: &SchemaNode) -> Result<()> {
    match node {
        SchemaNode::Object(_) | SchemaNode::Array { .. } | SchemaNode::StringMap => Ok(()),
        _ => Err(SchemaError::InvalidValue("Path is too long".to_string())),
    }
}

fn empty_container(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Array { .. } => Value::Array(Vec::new()),
        _ => Value::Object(Map::new()),
    }
}

fn as_object_mut(value: &mut Value) -> Result<&mut Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(SchemaError::TypeMismatch("Should be an object".to_string())),
    }
}

fn as_array_mut(value: &mut Value) -> Result<&mut Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(SchemaError::TypeMismatch("Should be an array".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::getter::get;

    use super::*;

    fn sample_schema() -> SchemaNode {
        SchemaNode::object([
            Field::new("node", SchemaNode::String),
            Field::new("user", SchemaNode::array(SchemaNode::String)),
            Field::new(
                "tag",
                SchemaNode::object([
                    Field::new("name", SchemaNode::String),
                    Field::new("level", SchemaNode::Integer),
                    Field::new(
                        "cascade",
                        SchemaNode::object([Field::new("amount", SchemaNode::Number)]),
                    ),
                ]),
            ),
            Field::new(
                "event",
                SchemaNode::array(SchemaNode::object([
                    Field::new("name", SchemaNode::String),
                    Field::new("alarm", SchemaNode::Boolean),
                ])),
            ),
            Field::new("spec", SchemaNode::StringMap),
        ])
    }

    #[test]
    fn test_empty_path_cannot_set_root() {
        let mut data = json!({});
        let err = set(&sample_schema(), &[], &mut data, json!({})).unwrap_err();
        assert_eq!(err, SchemaError::InvalidValue("Cannot set itself".into()));
    }

    #[test]
    fn test_set_first_level_value() {
        let mut data = json!({});
        set(&sample_schema(), &["node".into()], &mut data, json!("5")).unwrap();
        assert_eq!(data, json!({"node": "5"}));
    }

    #[test]
    fn test_set_whole_object() {
        let mut data = json!({"node": "5"});
        let value = json!({"name": "abc", "level": 10});
        set(&sample_schema(), &["tag".into()], &mut data, value).unwrap();
        assert_eq!(data, json!({"node": "5", "tag": {"name": "abc", "level": 10}}));
    }

    #[test]
    fn test_unrecognized_field() {
        let mut data = json!({"node": "5"});
        let err = set(&sample_schema(), &["nod".into()], &mut data, json!(5)).unwrap_err();
        assert_eq!(err, SchemaError::InvalidValue("Unrecognized field: nod".into()));
    }

    #[test]
    fn test_set_second_level_value() {
        let mut data = json!({"node": "5", "tag": {"name": "abc", "level": 10}});
        set(&sample_schema(), &["tag".into(), "level".into()], &mut data, json!(7)).unwrap();
        assert_eq!(data, json!({"node": "5", "tag": {"name": "abc", "level": 7}}));
    }

    #[test]
    fn test_intermediate_object_is_created() {
        let mut data = json!({"node": "5"});
        set(&sample_schema(), &["tag".into(), "level".into()], &mut data, json!(7)).unwrap();
        assert_eq!(data, json!({"node": "5", "tag": {"level": 7}}));
    }

    #[test]
    fn test_path_too_long_through_leaf() {
        let mut data = json!({"node": "5"});
        let err = set(&sample_schema(), &["node".into(), "level".into()], &mut data, json!(7))
            .unwrap_err();
        assert_eq!(err, SchemaError::InvalidValue("Path is too long".into()));
    }

    #[test]
    fn test_second_level_unrecognized_field() {
        let mut data = json!({});
        let err = set(&sample_schema(), &["tag".into(), "node".into()], &mut data, json!("5"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized field: node");
    }

    #[test]
    fn test_first_unrecognized_field_reported() {
        let mut data = json!({});
        let err = set(&sample_schema(), &["nod".into(), "node".into()], &mut data, json!("5"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unrecognized field: nod");
    }

    #[test]
    fn test_set_array_element() {
        let mut data = json!({"user": ["abc", "xyz"]});
        set(&sample_schema(), &["user".into(), 1.into()], &mut data, json!("def")).unwrap();
        assert_eq!(data, json!({"user": ["abc", "def"]}));
    }

    #[test]
    fn test_array_padding_with_nulls() {
        let mut data = json!({});
        set(&sample_schema(), &["user".into(), 2.into()], &mut data, json!("def")).unwrap();
        assert_eq!(data, json!({"user": [null, null, "def"]}));
    }

    #[test]
    fn test_non_integer_index_is_shape_error() {
        let mut data = json!({"user": ["abc"]});
        let err = set(&sample_schema(), &["user".into(), "a".into()], &mut data, json!("x"))
            .unwrap_err();
        assert_eq!(err, SchemaError::TypeMismatch("Index should be integer".into()));
    }

    #[test]
    fn test_set_inside_array_of_objects_creates_intermediates() {
        let mut data = json!({"node": "5"});
        let path = ["event".into(), 1.into(), "name".into()];
        set(&sample_schema(), &path, &mut data, json!("def")).unwrap();
        assert_eq!(data, json!({"node": "5", "event": [null, {"name": "def"}]}));
    }

    #[test]
    fn test_set_string_map_entry() {
        let mut data = json!({});
        set(&sample_schema(), &["spec".into(), "def".into()], &mut data, json!("1")).unwrap();
        assert_eq!(data, json!({"spec": {"def": "1"}}));
    }

    #[test]
    fn test_string_map_is_terminal() {
        let mut data = json!({});
        let path = ["spec".into(), "def".into(), "x".into()];
        let err = set(&sample_schema(), &path, &mut data, json!("1")).unwrap_err();
        assert_eq!(err.to_string(), "Path is too long");
    }

    #[test]
    fn test_shape_mismatch_is_propagated_eagerly() {
        let mut data = json!({"tag": "not an object"});
        let err = set(&sample_schema(), &["tag".into(), "level".into()], &mut data, json!(7))
            .unwrap_err();
        assert_eq!(err, SchemaError::TypeMismatch("Should be an object".into()));
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let schema = sample_schema();
        let mut data = json!({});
        let paths: [&[PathSegment]; 3] = [
            &["tag".into(), "cascade".into(), "amount".into()],
            &["event".into(), 0.into(), "alarm".into()],
            &["spec".into(), "size".into()],
        ];
        let values = [json!(1.5), json!(true), json!("xl")];
        for (path, value) in paths.iter().zip(&values) {
            set(&schema, path, &mut data, value.clone()).unwrap();
            assert_eq!(get(&schema, path, &data).unwrap(), Some(value));
        }
    }
}
