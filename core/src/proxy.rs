//! Chainable path builder over a value and its schema.
//!
//! A [`Proxy`] records the root value, the schema, and an accumulated path.
//! Each `field`/`at` call appends one segment and returns the proxy; no
//! traversal happens until `get` or `set` resolves the accumulated path
//! through the schema-guided getter/setter.

use serde_json::Value;

use crate::error::Result;
use crate::getter;
use crate::path::PathSegment;
use crate::setter;
use crate::types::SchemaNode;

/// Deferred, schema-guided access to one location in a data tree.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Field, Proxy, SchemaNode};
/// use serde_json::json;
///
/// let schema = SchemaNode::object([Field::new(
///     "event",
///     SchemaNode::array(SchemaNode::object([Field::new("name", SchemaNode::String)])),
/// )]);
/// let mut data = json!({"event": [{"name": "abc"}, {"name": "xyz"}]});
///
/// let name = Proxy::new(&mut data, &schema).field("event").at(1).field("name").get().unwrap();
/// assert_eq!(name, Some(json!("xyz")));
///
/// Proxy::new(&mut data, &schema).field("event").at(2).field("name").set(json!("def")).unwrap();
/// assert_eq!(data["event"][2], json!({"name": "def"}));
/// ```
#[derive(Debug)]
pub struct Proxy<'a> {
    target: &'a mut Value,
    schema: &'a SchemaNode,
    path: Vec<PathSegment>,
}

impl<'a> Proxy<'a> {
    /// Wraps `target` under `schema` with an empty path.
    pub fn new(target: &'a mut Value, schema: &'a SchemaNode) -> Self {
        Proxy {
            target,
            schema,
            path: Vec::new(),
        }
    }

    /// Appends a field name or map key. No traversal happens yet.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.path.push(PathSegment::Key(name.into()));
        self
    }

    /// Appends an array index. No traversal happens yet.
    pub fn at(mut self, index: usize) -> Self {
        self.path.push(PathSegment::Index(index));
        self
    }

    /// The accumulated path so far.
    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Resolves the accumulated path, cloning the value found.
    pub fn get(&self) -> Result<Option<Value>> {
        Ok(getter::get(self.schema, &self.path, self.target)?.cloned())
    }

    /// Writes `value` at the accumulated path, mutating the wrapped root in
    /// place and creating intermediate containers as needed.
    pub fn set(self, value: Value) -> Result<()> {
        setter::set(self.schema, &self.path, self.target, value)
    }
}
