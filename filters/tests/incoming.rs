//! End-to-end incoming conversion with real filter pipelines.

use json_contract_core::{Field, SchemaError, SchemaNode, incoming};
use json_contract_filters::{max_length, min_length, not_null, range, trim};
use serde_json::json;

fn device_schema() -> SchemaNode {
    SchemaNode::object([
        Field::new("node", SchemaNode::String).with_filter(max_length(6)),
        Field::new("user", SchemaNode::array_with(SchemaNode::String, [max_length(6)])),
        Field::new(
            "tag",
            SchemaNode::object([
                Field::new("name", SchemaNode::String).with_filter(max_length(4)),
                Field::new("level", SchemaNode::Integer).with_filter(range(0.0, 3.0)),
            ]),
        ),
        Field::new(
            "event",
            SchemaNode::array(SchemaNode::object([
                Field::new("name", SchemaNode::String).with_filter(max_length(3)),
                Field::new("alarm", SchemaNode::Boolean),
            ])),
        ),
    ])
}

#[test]
fn converts_valid_input_and_fills_missing_fields() {
    let input = json!({"user": ["abc", "def", "xxxxxx"]});
    let value = incoming::convert(&device_schema(), &input).unwrap();
    assert_eq!(
        value,
        json!({"node": null, "user": ["abc", "def", "xxxxxx"], "tag": null, "event": null})
    );
}

#[test]
fn rejects_value_above_range_inside_nested_object() {
    let input = json!({"tag": {"name": "abc", "level": 4}});
    let err = incoming::convert(&device_schema(), &input).unwrap_err();
    assert_eq!(err.to_string(), "tag.level: Value is too large");
    assert!(matches!(err, SchemaError::InvalidValue(_)));
}

#[test]
fn rejects_long_string_inside_array_of_objects() {
    let input = json!({"event": [{"name": "abcd", "alarm": true}, {"name": "def", "alarm": false}]});
    let err = incoming::convert(&device_schema(), &input).unwrap_err();
    assert_eq!(err.to_string(), "event.0.name: String is too long");
}

#[test]
fn array_filters_run_per_element() {
    let input = json!({"user": ["abc", "1234567"]});
    let err = incoming::convert(&device_schema(), &input).unwrap_err();
    assert_eq!(err.to_string(), "user.1: String is too long");
}

#[test]
fn filters_run_in_attachment_order() {
    let schema = SchemaNode::object([
        Field::new("node", SchemaNode::String)
            .with_filter(not_null())
            .with_filter(max_length(4)),
    ]);
    let err = incoming::convert(&schema, &json!({"node": null})).unwrap_err();
    assert_eq!(err.to_string(), "node: Cannot be null");
    let err = incoming::convert(&schema, &json!({"node": "abcde"})).unwrap_err();
    assert_eq!(err.to_string(), "node: String is too long");
}

#[test]
fn trim_runs_after_type_conversion() {
    let schema = SchemaNode::object([
        Field::new("name", SchemaNode::String)
            .with_filter(trim())
            .with_filter(min_length(2)),
    ]);
    let value = incoming::convert(&schema, &json!({"name": "  ab "})).unwrap();
    assert_eq!(value, json!({"name": "ab"}));
    let err = incoming::convert(&schema, &json!({"name": " a "})).unwrap_err();
    assert_eq!(err.to_string(), "name: String is too short");
}

#[test]
fn field_filter_failure_wins_over_redundant_key() {
    let schema = SchemaNode::object([
        Field::new("node", SchemaNode::String).with_filter(max_length(4)),
    ]);
    let err = incoming::convert(&schema, &json!({"node": "abcde", "xxx": 6})).unwrap_err();
    assert_eq!(err.to_string(), "node: String is too long");
}

#[test]
fn redundant_keys_are_rejected_when_fields_pass() {
    let schema = SchemaNode::object([
        Field::new("node", SchemaNode::String).with_filter(max_length(4)),
    ]);
    let err = incoming::convert(&schema, &json!({"node": "abcd", "xxx": 6})).unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized field: xxx");
    let err = incoming::convert(&schema, &json!({"node": "abcd", "xxx": 6, "yyy": 7})).unwrap_err();
    assert_eq!(err.to_string(), "Unrecognized fields: xxx, yyy");
}

#[test]
fn either_reports_synthesized_failure_at_field_path() {
    let by_id = SchemaNode::object([
        Field::new("userId", SchemaNode::Integer),
        Field::new("password", SchemaNode::String).with_filter(min_length(4)),
    ]);
    let by_email = SchemaNode::object([
        Field::new("email", SchemaNode::String),
        Field::new("passphrase", SchemaNode::String).with_filter(min_length(5)),
    ]);
    let schema = SchemaNode::object([Field::new(
        "credential",
        SchemaNode::either([by_id, SchemaNode::String, by_email]),
    )]);

    let input = json!({"credential": {"userId": 5, "password": "abc"}});
    let err = incoming::convert(&schema, &input).unwrap_err();
    assert_eq!(err.to_string(), "credential: Invalid value");

    let input = json!({"credential": {"userId": 5, "password": "abcd"}});
    let value = incoming::convert(&schema, &input).unwrap();
    assert_eq!(value, json!({"credential": {"userId": 5, "password": "abcd"}}));

    let input = json!({"credential": "api-token"});
    let value = incoming::convert(&schema, &input).unwrap();
    assert_eq!(value, json!({"credential": "api-token"}));
}

#[test]
fn either_prefers_first_matching_alternative() {
    let narrow = SchemaNode::object([
        Field::new("name", SchemaNode::String).with_filter(max_length(8)),
    ]);
    let broad = SchemaNode::object([Field::new("name", SchemaNode::Any)]);
    let schema = SchemaNode::either([narrow.clone(), broad.clone()]);
    let value = incoming::convert(&schema, &json!({"name": "ok"})).unwrap();
    assert_eq!(value, json!({"name": "ok"}));

    // Swapping the declaration order flips which alternative resolves a
    // value satisfying both; the conversion result here is the same shape,
    // so exercise it through a value only the broad alternative accepts.
    let schema = SchemaNode::either([broad, narrow]);
    let value = incoming::convert(&schema, &json!({"name": 42})).unwrap();
    assert_eq!(value, json!({"name": 42}));
}
