//! Path-addressable document trees.
//!
//! This module turns a [`Value`] into a tree of [`Node`]s that can be read and
//! rewritten through dotted path expressions, and flattens it back again.
//! The [`Tree`] type is the entry point; the submodules hold the individual
//! transforms so they can be used and tested on their own:
//!
//! - [`build`] - value model → node tree
//! - [`materialize`] - node tree → value model
//! - [`resolve`] - path → matching nodes (read-only)
//! - [`mutate`] - path + value/absence → new root
//! - [`size`] - slot counting under a [`SizePolicy`]
//!
//! # Usage
//!
//! ```
//! use arbor::{Tree, TreeConfig, value::Value};
//! use arbor::value::Record;
//!
//! let document = Record::typed("Configuration").with("colors", Value::Sequence(Vec::new()));
//! let mut tree = Tree::load(Some(document.into()), &TreeConfig::default())?;
//!
//! tree.set("colors.Color(-1).name", "red")?;
//! tree.set("colors.Color(-1).name", "blue")?;
//!
//! let blue = tree.get("colors.Color(1).name")?;
//! assert_eq!(blue.and_then(|lookup| lookup.single().cloned()), Some(Value::from("blue")));
//! assert_eq!(tree.size(), 2);
//! # Ok::<(), arbor::Error>(())
//! ```

use std::{str::FromStr, sync::Arc};

use crate::{
    config::TreeConfig,
    path::Path,
    value::{Record, Value},
};

pub mod build;
pub mod errors;
pub mod materialize;
pub mod mutate;
pub mod node;
pub mod resolve;
pub mod size;

pub use errors::TreeError;
pub use node::{Body, Node, NodeKind};
pub use resolve::Lookup;
pub use size::{ElementCounting, SizePolicy};

/// A document held as an addressable node tree.
///
/// Every mutation builds a new root and swaps it in with a single assignment,
/// sharing untouched subtrees with the previous root. A failed mutation leaves
/// the root untouched. [`Tree::root`] hands out the current root so readers can
/// hold a consistent snapshot across later writes.
#[derive(Debug, Clone)]
pub struct Tree {
    root: Arc<Node>,
    size_policy: SizePolicy,
}

impl Tree {
    /// Creates a tree holding an empty root record tagged with the configured
    /// default root type
    pub fn new(config: &TreeConfig) -> Self {
        Self {
            root: Arc::new(Node::empty_record(
                None,
                Some(config.default_root_type.clone()),
            )),
            size_policy: config.size_policy,
        }
    }

    /// Builds a tree from a whole document.
    ///
    /// An absent document yields [`Tree::new`].
    ///
    /// # Errors
    /// Returns [`TreeError::MalformedDocument`] when the root value is neither
    /// a record nor a mapping.
    pub fn load(document: Option<Value>, config: &TreeConfig) -> Result<Self, TreeError> {
        let Some(document) = document else {
            tracing::debug!(
                root_type = %config.default_root_type,
                "No document, creating default root"
            );
            return Ok(Self::new(config));
        };

        if !matches!(document, Value::Record(_) | Value::Mapping(_)) {
            return Err(TreeError::MalformedDocument {
                found: document.type_name().to_string(),
            });
        }

        let kind = document.kind();
        let root = build::build(None, document);
        tracing::debug!(root_kind = %kind, children = root.children().len(), "Loaded document");
        Ok(Self {
            root: Arc::new(root),
            size_policy: config.size_policy,
        })
    }

    /// Returns the current root
    pub fn root(&self) -> &Arc<Node> {
        &self.root
    }

    /// Gets the value(s) at a path string.
    ///
    /// Returns `Ok(None)` when nothing matches or the match was cleared.
    ///
    /// # Errors
    /// Fails only when `path` cannot be parsed.
    pub fn get(&self, path: &str) -> crate::Result<Option<Lookup>> {
        let path = Path::from_str(path)?;
        Ok(self.get_path(&path))
    }

    /// Gets the value(s) at a parsed path
    pub fn get_path(&self, path: &Path) -> Option<Lookup> {
        let nodes = resolve::resolve(&self.root, path);
        Lookup::from_nodes(&nodes)
    }

    /// Sets a value at a path string
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> crate::Result<()> {
        self.update(path, Some(value.into()))
    }

    /// Deletes the value at a path string.
    ///
    /// Record properties are cleared in place; mapping entries and sequence
    /// elements are removed.
    pub fn remove(&mut self, path: &str) -> crate::Result<()> {
        self.update(path, None)
    }

    /// Sets (`Some`) or deletes (`None`) the value at a path string
    pub fn update(&mut self, path: &str, value: Option<Value>) -> crate::Result<()> {
        let path = Path::from_str(path)?;
        self.update_path(&path, value)?;
        Ok(())
    }

    /// Sets (`Some`) or deletes (`None`) the value at a parsed path.
    ///
    /// On error the tree is left unchanged.
    pub fn update_path(&mut self, path: &Path, value: Option<Value>) -> Result<(), TreeError> {
        let root = mutate::mutate(&self.root, path, value)?;
        self.root = Arc::new(root);
        Ok(())
    }

    /// Returns true if the slot at `path` exists but was cleared in place
    pub fn is_cleared(&self, path: &str) -> crate::Result<bool> {
        let path = Path::from_str(path)?;
        let nodes = resolve::resolve(&self.root, &path);
        Ok(!nodes.is_empty() && nodes.iter().all(|node| node.is_cleared()))
    }

    /// Returns the number of addressable slots
    pub fn size(&self) -> usize {
        size::size(&self.root, &self.size_policy)
    }

    /// Returns true if the root has no live children
    pub fn is_empty(&self) -> bool {
        size::is_empty(&self.root)
    }

    /// Returns the counting policy in use
    pub fn size_policy(&self) -> &SizePolicy {
        &self.size_policy
    }

    /// Flattens the whole tree into a document value for a codec to serialize
    pub fn to_document(&self) -> Value {
        materialize::materialize(&self.root).unwrap_or_else(|| Value::Record(Record::new()))
    }
}
