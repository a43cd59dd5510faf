//! Schema type definitions for JSON-shaped data contracts.
//!
//! This module defines the data model the converters interpret: a closed
//! vocabulary of [`SchemaNode`] variants describing expected value shapes,
//! [`Field`] entries for object members, and the [`Filter`] wrapper for the
//! per-field validation/transformation pipeline.
//!
//! Schema trees are built once (typically at startup) and are immutable
//! afterwards. Every piece is `Clone + Send + Sync`, so one schema value can
//! drive any number of concurrent conversions; no per-node state is ever
//! written during traversal.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::path::Path;

/// The function shape every filter and validator must satisfy: a pure
/// function of the value and its location, returning the (possibly
/// transformed) value or failing with a path-qualified error.
pub type FilterAction = dyn Fn(Value, &Path) -> Result<Value> + Send + Sync;

/// A named entry in a field's ordered filter pipeline.
///
/// Filters compose left to right; each receives the previous filter's output
/// together with the path of the field being processed. A filter handed
/// `Value::Null` must pass it through unchanged unless it specifically
/// asserts non-nullability.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Filter, Path, SchemaError};
/// use serde_json::Value;
///
/// let not_null = Filter::new("NotNull", |value, path| {
///     if value.is_null() {
///         return Err(SchemaError::invalid_value(path, "Cannot be null"));
///     }
///     Ok(value)
/// });
/// assert_eq!(not_null.name(), "NotNull");
/// assert!(not_null.apply(Value::Null, &Path::root()).is_err());
/// ```
#[derive(Clone)]
pub struct Filter {
    name: String,
    action: Arc<FilterAction>,
}

impl Filter {
    /// Wraps `action` under a diagnostic name.
    pub fn new(
        name: impl Into<String>,
        action: impl Fn(Value, &Path) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        Filter {
            name: name.into(),
            action: Arc::new(action),
        }
    }

    /// The diagnostic name this filter was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the filter on `value` at `path`.
    pub fn apply(&self, value: Value, path: &Path) -> Result<Value> {
        (self.action)(value, path)
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("name", &self.name).finish()
    }
}

/// One node of the declarative type tree describing an expected data shape.
///
/// Primitive leaves carry no payload; containers carry their member
/// descriptions. Dispatch in the converters is a `match` over this enum, so
/// adding a variant is a compile-time-checked change.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, SchemaNode, incoming};
/// use serde_json::json;
///
/// let schema = SchemaNode::object([
///     Field::new("name", SchemaNode::String),
///     Field::new("level", SchemaNode::Integer),
/// ]);
///
/// let value = incoming::convert(&schema, &json!({"name": "abc"})).unwrap();
/// assert_eq!(value, json!({"name": "abc", "level": null}));
/// ```
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// Identity: any value passes through unchanged.
    Any,
    /// A textual value.
    String,
    /// A whole number; booleans are rejected.
    Integer,
    /// Integer or floating-point; booleans are rejected.
    Number,
    /// Strictly boolean.
    Boolean,
    /// An open-keyed mapping whose values must all be strings.
    StringMap,
    /// A fixed, named shape with an ordered field list.
    Object(Vec<Field>),
    /// A homogeneous sequence; `filters` run per element.
    Array {
        element: Box<SchemaNode>,
        filters: Vec<Filter>,
    },
    /// Ordered alternatives resolved by trial-and-first-success.
    Either(Vec<SchemaNode>),
}

impl SchemaNode {
    /// Builds an object node from its ordered fields.
    ///
    /// Field names must be unique; a duplicate is a schema-authoring bug,
    /// not a runtime error.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_contract_core::{Field, SchemaNode};
    ///
    /// let schema = SchemaNode::object([
    ///     Field::new("node", SchemaNode::String),
    ///     Field::new("spec", SchemaNode::StringMap),
    /// ]);
    /// assert!(matches!(schema, SchemaNode::Object(ref fields) if fields.len() == 2));
    /// ```
    pub fn object(fields: impl IntoIterator<Item = Field>) -> Self {
        SchemaNode::Object(fields.into_iter().collect())
    }

    /// Builds an array node with no element filters.
    pub fn array(element: SchemaNode) -> Self {
        SchemaNode::Array {
            element: Box::new(element),
            filters: Vec::new(),
        }
    }

    /// Builds an array node whose `filters` run on every element, after the
    /// element itself converts.
    pub fn array_with(element: SchemaNode, filters: impl IntoIterator<Item = Filter>) -> Self {
        SchemaNode::Array {
            element: Box::new(element),
            filters: filters.into_iter().collect(),
        }
    }

    /// Builds a tagged-alternative node. Alternative order is significant:
    /// the first alternative that converts successfully wins.
    pub fn either(alternatives: impl IntoIterator<Item = SchemaNode>) -> Self {
        SchemaNode::Either(alternatives.into_iter().collect())
    }
}

/// A named member of an [`Object`](SchemaNode::Object) schema.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, Filter, SchemaNode};
///
/// let field = Field::new("node", SchemaNode::String)
///     .with_filter(Filter::new("Identity", |value, _| Ok(value)));
/// assert_eq!(field.name, "node");
/// assert_eq!(field.filters.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    /// Field name, unique within the enclosing object.
    pub name: String,
    /// Expected shape of the field's value.
    pub schema: SchemaNode,
    /// Ordered filter pipeline applied to the field's value.
    pub filters: Vec<Filter>,
}

impl Field {
    /// Creates a field with an empty filter pipeline.
    pub fn new(name: impl Into<String>, schema: SchemaNode) -> Self {
        Field {
            name: name.into(),
            schema,
            filters: Vec::new(),
        }
    }

    /// Appends a filter to the pipeline. Filters run in the order attached.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// Looks up a field by name in an object's field list.
pub(crate) fn find_field<'a>(fields: &'a [Field], name: &str) -> Option<&'a Field> {
    fields.iter().find(|field| field.name == name)
}
