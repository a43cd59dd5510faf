//! Error types for schema-driven conversion and path access.
//!
//! Two kinds cover every failure mode: the runtime shape of a value does not
//! match its schema node, or the shape matches but a declared constraint is
//! violated. Both carry a message already qualified with the dotted path to
//! the offending value, so `Display` output is stable enough to expose to
//! API clients.

use thiserror::Error;

use crate::path::Path;

/// Errors produced by converters, filters, and path access.
///
/// The message format is a compatibility contract:
/// `"<path.joined.by.dots>: <message>"` when the path is non-empty, else the
/// bare message.
///
/// # Examples
///
/// ```
/// use json_contract_core::{Path, SchemaError};
///
/// let path = Path::root().child("tag").child("level");
/// let err = SchemaError::invalid_value(&path, "Value is too large");
/// assert_eq!(err.to_string(), "tag.level: Value is too large");
///
/// let err = SchemaError::type_mismatch(&Path::root(), "Should be a string");
/// assert_eq!(err.to_string(), "Should be a string");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The runtime shape of the value does not match the schema node
    /// (wrong primitive kind, not an object, not an array, map value not a
    /// string, non-integer array index).
    #[error("{0}")]
    TypeMismatch(String),
    /// The shape is correct but a declared constraint is violated
    /// (unrecognized field, filter rejection, no `Either` alternative
    /// matched, malformed path during get/set).
    #[error("{0}")]
    InvalidValue(String),
}

impl SchemaError {
    /// Builds a shape error with the message qualified by `path`.
    pub fn type_mismatch(path: &Path, message: &str) -> Self {
        SchemaError::TypeMismatch(path.message(message))
    }

    /// Builds a constraint error with the message qualified by `path`.
    pub fn invalid_value(path: &Path, message: &str) -> Self {
        SchemaError::InvalidValue(path.message(message))
    }

    /// The path-qualified message carried by either kind.
    pub fn message(&self) -> &str {
        match self {
            SchemaError::TypeMismatch(msg) | SchemaError::InvalidValue(msg) => msg,
        }
    }
}

/// Convenience alias for results with [`SchemaError`].
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_prefixed_with_path() {
        let path = Path::root().child("node");
        let err = SchemaError::type_mismatch(&path, "Should be a string");
        assert_eq!(err.to_string(), "node: Should be a string");
    }

    #[test]
    fn test_root_path_message_is_bare() {
        let err = SchemaError::invalid_value(&Path::root(), "Invalid value");
        assert_eq!(err.to_string(), "Invalid value");
    }

    #[test]
    fn test_kinds_are_distinct() {
        let shape = SchemaError::TypeMismatch("x".to_string());
        let constraint = SchemaError::InvalidValue("x".to_string());
        assert_ne!(shape, constraint);
        assert_eq!(shape.message(), constraint.message());
    }
}
