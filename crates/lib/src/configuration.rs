//! Stream-backed configuration built on a [`Tree`].
//!
//! [`Configuration`] is the adapter a host configuration framework talks to:
//! it reads a document from a stream through a [`DocumentCodec`], answers
//! key lookups and edits with path expressions, and writes the document back.

use std::io::{Read, Write};

use crate::{
    Result,
    codec::DocumentCodec,
    config::TreeConfig,
    tree::{Lookup, Tree},
    value::Value,
};

/// A configuration whose properties live in a path-addressable tree.
///
/// Until the first successful [`Configuration::read`] there is no tree:
/// lookups find nothing and the configuration reports itself empty. The first
/// edit creates a default root.
#[derive(Debug)]
pub struct Configuration<C> {
    codec: C,
    config: TreeConfig,
    tree: Option<Tree>,
}

impl<C: DocumentCodec> Configuration<C> {
    /// Creates an unloaded configuration
    pub fn new(codec: C, config: TreeConfig) -> Self {
        Self {
            codec,
            config,
            tree: None,
        }
    }

    /// Replaces the tree with the document read from `reader`.
    ///
    /// An input with no document yields an empty default root.
    ///
    /// # Errors
    /// Fails on I/O and codec errors, and with
    /// [`crate::tree::TreeError::MalformedDocument`] when the decoded root is
    /// neither a record nor a mapping. The previous tree is kept on failure.
    pub fn read(&mut self, mut reader: impl Read) -> Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let document = self.codec.decode(&bytes)?;
        let tree = Tree::load(document, &self.config)?;
        tracing::debug!(bytes = bytes.len(), size = tree.size(), "Read configuration");
        self.tree = Some(tree);
        Ok(())
    }

    /// Serializes the current document to `writer`.
    ///
    /// An unloaded configuration writes an empty default root.
    pub fn write(&self, mut writer: impl Write) -> Result<()> {
        let document = match &self.tree {
            Some(tree) => tree.to_document(),
            None => Tree::new(&self.config).to_document(),
        };
        let bytes = self.codec.encode(&document)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        tracing::debug!(bytes = bytes.len(), "Wrote configuration");
        Ok(())
    }

    /// Gets the value(s) stored under `key`
    pub fn get_property(&self, key: &str) -> Result<Option<Lookup>> {
        match &self.tree {
            Some(tree) => tree.get(key),
            None => Ok(None),
        }
    }

    /// Sets the value stored under `key`
    pub fn add_property(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        self.tree_mut().set(key, value)
    }

    /// Deletes the value stored under `key`
    pub fn clear_property(&mut self, key: &str) -> Result<()> {
        match &mut self.tree {
            Some(tree) => tree.remove(key),
            None => Ok(()),
        }
    }

    /// Returns true if there is no tree or it holds no properties
    pub fn is_empty(&self) -> bool {
        self.tree.as_ref().is_none_or(|tree| tree.size() == 0)
    }

    /// Returns the number of addressable slots
    pub fn size(&self) -> usize {
        self.tree.as_ref().map_or(0, Tree::size)
    }

    /// Returns the loaded tree, if any
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    fn tree_mut(&mut self) -> &mut Tree {
        self.tree.get_or_insert_with(|| Tree::new(&self.config))
    }
}
