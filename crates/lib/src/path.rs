//! Path expressions for addressing nodes in a document tree.
//!
//! A path is a dot-separated list of segments. Each segment is either a plain
//! name, or a name followed by a parenthesized index:
//!
//! - `name` - every child called `name`
//! - `name(i)` - the `i`-th child called `name` (0-based, in child order)
//! - `name(-1)` - the append sentinel: create a new `name` record at the end
//!
//! # Usage
//!
//! ```rust
//! use arbor::path::{Index, Path};
//! use std::str::FromStr;
//!
//! let path = Path::from_str("colors.Color(1).name")?;
//! let segments: Vec<_> = path.segments().iter().map(|s| s.to_string()).collect();
//! assert_eq!(segments, vec!["colors", "Color(1)", "name"]);
//! assert_eq!(path.segments()[1].index(), Some(Index::At(1)));
//! # Ok::<(), arbor::path::PathError>(())
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// The literal index that requests a new element.
pub const APPEND_SENTINEL: i64 = -1;

/// Error type for path parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// The path has no segments.
    #[error("Empty path")]
    Empty,

    /// A segment could not be parsed.
    #[error("Invalid segment '{segment}': {reason}")]
    InvalidSegment { segment: String, reason: String },
}

/// Normalizes a path string by cleaning up dots and empty components.
///
/// - Leading dots ".user" → "user"
/// - Trailing dots "user." → "user"
/// - Consecutive dots "user..profile" → "user.profile"
/// - Pure dots "..." → empty string
///
/// # Examples
///
/// ```rust
/// # use arbor::path::normalize_path;
/// assert_eq!(normalize_path(""), "");
/// assert_eq!(normalize_path(".user"), "user");
/// assert_eq!(normalize_path("user..profile"), "user.profile");
/// assert_eq!(normalize_path("..."), "");
/// ```
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// The index carried by an indexed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Index {
    /// Address the n-th existing sibling with the segment's name
    At(usize),
    /// Create a new record and append it after the existing siblings
    Append,
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Index::At(i) => write!(f, "{i}"),
            Index::Append => write!(f, "{APPEND_SENTINEL}"),
        }
    }
}

/// One dot-delimited unit of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    name: String,
    index: Option<Index>,
}

impl Segment {
    /// Creates a plain segment
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    /// Creates a segment addressing the `index`-th sibling called `name`
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(Index::At(index)),
        }
    }

    /// Creates an append-sentinel segment
    pub fn append(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: Some(Index::Append),
        }
    }

    /// Returns the segment name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the index, or `None` for a plain segment
    pub fn index(&self) -> Option<Index> {
        self.index
    }

    /// Returns true if this segment carries the append sentinel
    pub fn is_append(&self) -> bool {
        self.index == Some(Index::Append)
    }
}

impl FromStr for Segment {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| PathError::InvalidSegment {
            segment: s.to_string(),
            reason: reason.to_string(),
        };

        let Some(open) = s.find('(') else {
            if s.contains(')') {
                return Err(invalid("unbalanced parenthesis"));
            }
            return Ok(Segment::named(s));
        };

        let name = &s[..open];
        if name.is_empty() {
            return Err(invalid("missing name before index"));
        }
        let Some(inner) = s[open + 1..].strip_suffix(')') else {
            return Err(invalid("index must end the segment with ')'"));
        };
        if inner.contains(['(', ')']) {
            return Err(invalid("unbalanced parenthesis"));
        }

        let raw: i64 = inner
            .trim()
            .parse()
            .map_err(|_| invalid("index is not an integer"))?;
        let index = match raw {
            APPEND_SENTINEL => Index::Append,
            n if n >= 0 => Index::At(n as usize),
            _ => return Err(invalid("negative index other than -1")),
        };

        Ok(Segment {
            name: name.to_string(),
            index: Some(index),
        })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}({index})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A parsed path expression.
///
/// Parsing normalizes away empty components, so `"a..b"` and `".a.b."` are
/// both the two-segment path `a.b`. A path always has at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// Creates a path from already-built segments.
    ///
    /// # Errors
    /// Returns [`PathError::Empty`] when `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self { segments })
    }

    /// Returns the segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept for symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the last segment
    pub fn last(&self) -> &Segment {
        // Constructors reject empty paths.
        &self.segments[self.segments.len() - 1]
    }

    /// Returns true if any segment carries the append sentinel
    pub fn has_append(&self) -> bool {
        self.segments.iter().any(Segment::is_append)
    }

    /// Returns a new path with `segment` appended
    pub fn push(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments = normalize_path(s)
            .split('.')
            .filter(|component| !component.is_empty())
            .map(Segment::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Path::new(segments)
    }
}

impl TryFrom<&str> for Path {
    type Error = PathError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Path::from_str(s)
    }
}

impl From<Segment> for Path {
    fn from(segment: Segment) -> Self {
        Self {
            segments: vec![segment],
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl From<PathError> for crate::Error {
    fn from(err: PathError) -> Self {
        crate::Error::Path(err)
    }
}
