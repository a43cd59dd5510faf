//! Paths into nested JSON-shaped values.
//!
//! A [`Path`] is an ordered sequence of segments, each a field name, map key,
//! or array index. Paths serve double duty: navigation during get/set, and
//! composing the human-readable error locations used throughout the crate
//! (segments joined by `.`).

use std::fmt;

/// One step into a nested value: a field/map key or an array index.
///
/// # Examples
///
/// ```
/// use json_contract_core::PathSegment;
///
/// let key = PathSegment::from("tag");
/// let index = PathSegment::from(2);
/// assert_eq!(key.to_string(), "tag");
/// assert_eq!(index.to_string(), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object field name or string-map key.
    Key(String),
    /// An array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(name) => f.write_str(name),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(name: &str) -> Self {
        PathSegment::Key(name.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(name: String) -> Self {
        PathSegment::Key(name)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// The location of a value within a nested structure.
///
/// Immutable: [`child`](Path::child) returns an extended copy, leaving the
/// original untouched. Converters thread the current path through every
/// recursive call as a plain argument, so concurrent conversions over a
/// shared schema never interfere.
///
/// # Examples
///
/// ```
/// use json_contract_core::Path;
///
/// let path = Path::root().child("event").child(1).child("name");
/// assert_eq!(path.to_string(), "event.1.name");
/// assert_eq!(path.message("String is too long"), "event.1.name: String is too long");
/// assert_eq!(Path::root().message("Invalid value"), "Invalid value");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The empty path addressing the root value.
    pub fn root() -> Self {
        Path::default()
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<PathSegment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Path { segments }
    }

    /// Whether this path addresses the root value.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Formats `message` prefixed with this path, or bare at the root.
    pub fn message(&self, message: &str) -> String {
        if self.is_root() {
            return message.to_string();
        }
        format!("{self}: {message}")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<Vec<PathSegment>> for Path {
    fn from(segments: Vec<PathSegment>) -> Self {
        Path { segments }
    }
}
