//! Filter and validator library for `json-contract` schemas.
//!
//! Every function here returns a [`Filter`](json_contract_core::Filter)
//! satisfying the core contract: a pure function of `(value, path)` that
//! returns the (possibly transformed) value or fails with a path-qualified
//! error. All filters pass `null` through unchanged except the explicit
//! nullability assertions [`not_null`] and [`not_empty`].
//!
//! Shape checking is the schema's job, not the filters'; a length or range
//! filter applied to a value of an unexpected shape passes it through
//! untouched and leaves the rejection to the type checkers.
//!
//! # Example
//!
//! ```
//! use json_contract_core::{Field, SchemaNode, incoming};
//! use json_contract_filters::{max_length, not_null};
//! use serde_json::json;
//!
//! let schema = SchemaNode::object([
//!     Field::new("node", SchemaNode::String)
//!         .with_filter(not_null())
//!         .with_filter(max_length(4)),
//! ]);
//!
//! let err = incoming::convert(&schema, &json!({"node": "abcde"})).unwrap_err();
//! assert_eq!(err.to_string(), "node: String is too long");
//! ```

mod transform;
mod validate;

pub use transform::{to_string, to_timestamp, trim};
pub use validate::{
    exclusive_maximum, exclusive_minimum, length_range, max_length, maximum, min_length, minimum,
    not_empty, not_null, only, pattern, range,
};
