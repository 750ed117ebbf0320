//! Error types for tree operations.
//!
//! Every variant is fatal to the call that produced it. Mutations are
//! all-or-nothing, so a failed call leaves the tree it was applied to
//! unchanged.

use thiserror::Error;

/// Structured error types for tree loading and mutation.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum TreeError {
    /// A non-final segment without the append sentinel does not resolve to
    /// exactly one existing child, or the walk reached a node that cannot
    /// hold children
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// An explicit non-negative index has no corresponding sibling
    #[error("Not found: '{segment}' has no element at index {index} in path '{path}'")]
    NotFound {
        path: String,
        segment: String,
        index: usize,
    },

    /// The supplied value cannot be placed where the path asks for it
    #[error("Unsupported value at '{path}': {reason}")]
    UnsupportedValue { path: String, reason: String },

    /// The document root is neither a record nor a mapping
    #[error("Malformed document: root must be a record or mapping, found {found}")]
    MalformedDocument { found: String },
}

impl TreeError {
    /// Check if this error indicates an invalid path
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, TreeError::InvalidPath { .. })
    }

    /// Check if this error indicates a missing indexed element
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NotFound { .. })
    }

    /// Check if this error indicates an unplaceable value
    pub fn is_unsupported_value(&self) -> bool {
        matches!(self, TreeError::UnsupportedValue { .. })
    }

    /// Check if this error indicates a malformed document root
    pub fn is_malformed_document(&self) -> bool {
        matches!(self, TreeError::MalformedDocument { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::InvalidPath { path, .. }
            | TreeError::NotFound { path, .. }
            | TreeError::UnsupportedValue { path, .. } => Some(path),
            TreeError::MalformedDocument { .. } => None,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
