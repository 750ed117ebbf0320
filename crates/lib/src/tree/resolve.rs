//! Read-only path resolution.

use crate::{
    path::{Index, Path},
    value::Value,
};

use super::{materialize::materialize, node::Node};

/// The value(s) a path resolved to.
///
/// A plain segment matches every child with that name, so a path can
/// legitimately resolve to several nodes. Callers see that as
/// [`Lookup::Multiple`] rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// Exactly one match
    Single(Value),
    /// More than one match, in tree order
    Multiple(Vec<Value>),
}

impl Lookup {
    /// Returns the single value, or `None` for a multi-value result
    pub fn single(&self) -> Option<&Value> {
        match self {
            Lookup::Single(value) => Some(value),
            Lookup::Multiple(_) => None,
        }
    }

    /// Consumes the lookup, returning every matched value
    pub fn into_values(self) -> Vec<Value> {
        match self {
            Lookup::Single(value) => vec![value],
            Lookup::Multiple(values) => values,
        }
    }

    /// Materializes resolved nodes. Cleared slots read as absent.
    pub(crate) fn from_nodes(nodes: &[&Node]) -> Option<Self> {
        let mut values: Vec<Value> = nodes.iter().filter_map(|node| materialize(node)).collect();
        match values.len() {
            0 => None,
            1 => values.pop().map(Lookup::Single),
            _ => Some(Lookup::Multiple(values)),
        }
    }
}

/// Returns every node `path` addresses under `root`, in tree order.
///
/// Each segment is matched against the children of the nodes the previous
/// segment produced. Leaves, sets and cleared slots have no addressable
/// children, and an append-sentinel segment never matches anything.
pub fn resolve<'a>(root: &'a Node, path: &Path) -> Vec<&'a Node> {
    let mut current: Vec<&'a Node> = vec![root];

    for segment in path.segments() {
        let mut next = Vec::new();
        for node in current.into_iter().filter(|node| node.is_navigable()) {
            let mut named = node.children_named(segment.name()).map(|(_, child)| child.as_ref());
            match segment.index() {
                None => next.extend(named),
                Some(Index::At(i)) => next.extend(named.nth(i)),
                Some(Index::Append) => {}
            }
        }
        if next.is_empty() {
            return next;
        }
        current = next;
    }

    if current.len() > 1 {
        tracing::trace!(path = %path, matches = current.len(), "Path resolved to multiple nodes");
    }
    current
}
