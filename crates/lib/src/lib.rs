//!
//! Arbor: path-addressable document trees.
//! This library turns a nested document into a tree that can be read and
//! edited at any depth with dotted path expressions.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: The interchange shape of a document: scalars, typed records, untyped mappings, sequences and unique sets. A document codec produces and consumes values; this crate never handles text.
//! * **Nodes (`tree::Node`)**: The addressable unit. Each node knows the kind of value it was built from, and containers share their children by reference.
//! * **Paths (`path::Path`)**: Dot-separated segments such as `colors.Color(1).name`. An index selects among same-named siblings, and the sentinel `-1` appends a new record.
//! * **Trees (`Tree`)**: Owns the current root and exposes load, get, set, size and conversion back to a document. Every edit swaps in a new root; a failed edit changes nothing.
//! * **Configuration (`Configuration`)**: A stream-backed adapter that pairs a `Tree` with a `DocumentCodec` for hosts that read and write configuration files.

pub mod codec;
pub mod config;
pub mod configuration;
pub mod path;
pub mod tree;
pub mod value;

pub use codec::DocumentCodec;
pub use config::TreeConfig;
pub use configuration::Configuration;
pub use tree::Tree;

/// Result type used throughout the Arbor library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Arbor library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document codec failed to decode or encode
    #[error("Codec error: {reason}")]
    Codec { reason: String },

    /// Structured path syntax errors from the path module
    #[error(transparent)]
    Path(path::PathError),

    /// Structured load and mutation errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Codec { .. } => "codec",
            Error::Path(_) => "path",
            Error::Tree(_) => "tree",
        }
    }

    /// Check if this error indicates an indexed element was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates a path that cannot be parsed or walked.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Path(_) => true,
            Error::Tree(tree_err) => tree_err.is_invalid_path(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Returns the tree error, if this is one.
    pub fn as_tree_error(&self) -> Option<&tree::TreeError> {
        match self {
            Error::Tree(tree_err) => Some(tree_err),
            _ => None,
        }
    }
}
