//! The addressable tree unit.
//!
//! A [`Node`] is either a leaf holding a [`Scalar`] or a container holding an
//! ordered list of children. Children are shared through [`Arc`] so a
//! mutation can rebuild the path from the root to the edited node while every
//! untouched sibling is reused by reference.

use std::sync::Arc;

use url::Url;

use crate::value::{Scalar, ValueKind};

/// What a node was built from.
///
/// The kind is fixed when the node is created and drives both materialization
/// and mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Built from a scalar
    Leaf,
    /// Built from a record, carrying its type tag and identifier
    Record {
        type_tag: Option<String>,
        id: Option<Url>,
    },
    /// Built from an untyped mapping
    Mapping,
    /// Built from a sequence
    Sequence,
    /// Built from a unique set; members are not addressable
    Set,
}

impl NodeKind {
    /// Returns the value variant this kind materializes to
    pub fn value_kind(&self) -> ValueKind {
        match self {
            NodeKind::Leaf => ValueKind::Scalar,
            NodeKind::Record { .. } => ValueKind::Record,
            NodeKind::Mapping => ValueKind::Mapping,
            NodeKind::Sequence => ValueKind::Sequence,
            NodeKind::Set => ValueKind::Set,
        }
    }

    /// Returns true for record nodes
    pub fn is_record(&self) -> bool {
        matches!(self, NodeKind::Record { .. })
    }
}

/// The payload of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Leaf payload
    Scalar(Scalar),
    /// Container payload
    Children(Vec<Arc<Node>>),
    /// A record property whose value was cleared in place. The slot keeps its
    /// name and kind but reads as absent.
    Cleared,
}

/// A node in a document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: Option<String>,
    kind: NodeKind,
    body: Body,
}

impl Node {
    /// Creates a leaf node
    pub fn leaf(name: Option<String>, value: Scalar) -> Self {
        Self {
            name,
            kind: NodeKind::Leaf,
            body: Body::Scalar(value),
        }
    }

    /// Creates a container node. `kind` is never [`NodeKind::Leaf`].
    pub(crate) fn container(
        name: Option<String>,
        kind: NodeKind,
        children: Vec<Arc<Node>>,
    ) -> Self {
        debug_assert!(!matches!(kind, NodeKind::Leaf), "leaf nodes hold a scalar");
        Self {
            name,
            kind,
            body: Body::Children(children),
        }
    }

    /// Creates an empty record node with the given type tag
    pub fn empty_record(name: Option<String>, type_tag: Option<String>) -> Self {
        Self::container(name, NodeKind::Record { type_tag, id: None }, Vec::new())
    }

    /// Returns the node name, `None` only for a synthetic root or an unnamed
    /// sequence/set element
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the node kind
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the node payload
    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Returns the scalar held by a leaf node
    pub fn scalar(&self) -> Option<&Scalar> {
        match &self.body {
            Body::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the children of a container node, or an empty slice
    pub fn children(&self) -> &[Arc<Node>] {
        match &self.body {
            Body::Children(children) => children,
            _ => &[],
        }
    }

    /// Returns true if this slot was cleared in place
    pub fn is_cleared(&self) -> bool {
        matches!(self.body, Body::Cleared)
    }

    /// Returns true if the path resolver and mutator may step into this node.
    ///
    /// Leaves, cleared slots and set members are not addressable.
    pub fn is_navigable(&self) -> bool {
        !matches!(self.kind, NodeKind::Leaf | NodeKind::Set) && !self.is_cleared()
    }

    /// Returns an iterator over the children called `name`, with their
    /// positions in the child list
    pub fn children_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = (usize, &'a Arc<Node>)> + use<'a, 'n> {
        self.children()
            .iter()
            .enumerate()
            .filter(move |(_, child)| child.name() == Some(name))
    }

    /// Returns a copy of this node with the same name and kind and the given
    /// children
    pub(crate) fn with_children(&self, children: Vec<Arc<Node>>) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind.clone(),
            body: Body::Children(children),
        }
    }

    /// Returns a cleared copy of this slot, keeping its name and kind
    pub(crate) fn cleared(&self) -> Self {
        Self {
            name: self.name.clone(),
            kind: self.kind.clone(),
            body: Body::Cleared,
        }
    }
}
