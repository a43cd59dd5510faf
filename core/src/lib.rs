//! Declarative schemas and conversion engine for JSON-shaped data.
//!
//! This crate defines a small, closed vocabulary for describing nested data
//! shapes and the generic algorithms that interpret such a description:
//!
//! - [`SchemaNode`] — one node of the declarative type tree (primitives,
//!   objects, arrays, string maps, tagged alternatives).
//! - [`Field`] / [`Filter`] — object members and their ordered
//!   validation/transformation pipelines.
//! - [`incoming`] — validate and normalize untrusted input into a
//!   fully-keyed internal value.
//! - [`outgoing`] — filter and reshape internal data into a sparse
//!   external-facing value.
//! - [`get`] / [`set`] / [`Proxy`] — schema-guided path access into a data
//!   tree, with auto-creation of intermediate containers on write.
//!
//! All traversal state (the current path) is threaded through call
//! arguments; schema trees are immutable after construction and safe to
//! share across threads.
//!
//! # Example
//!
//! ```
//! use json_contract_core::{Field, SchemaNode, incoming, outgoing};
//! use serde_json::json;
//!
//! let schema = SchemaNode::object([
//!     Field::new("node", SchemaNode::String),
//!     Field::new("tag", SchemaNode::object([
//!         Field::new("name", SchemaNode::String),
//!         Field::new("level", SchemaNode::Integer),
//!     ])),
//! ]);
//!
//! // Incoming results are fully keyed.
//! let internal = incoming::convert(&schema, &json!({"node": "abc"})).unwrap();
//! assert_eq!(internal, json!({"node": "abc", "tag": null}));
//!
//! // Outgoing results are sparse.
//! let external = outgoing::convert(&schema, &internal).unwrap();
//! assert_eq!(external, json!({"node": "abc"}));
//! ```

mod basic;
mod error;
mod getter;
pub mod incoming;
pub mod outgoing;
mod path;
mod proxy;
mod setter;
mod types;

pub use basic::{any_type, boolean_type, integer_type, number_type, string_map, string_type};
pub use error::{Result, SchemaError};
pub use getter::get;
pub use path::{Path, PathSegment};
pub use proxy::Proxy;
pub use setter::set;
pub use types::{Field, Filter, FilterAction, SchemaNode};
