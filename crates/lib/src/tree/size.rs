//! Structural counting over a node tree.
//!
//! `size` counts addressable property slots, not nodes: containers contribute
//! the sum of what they hold, leaves contribute one. How sets and untagged
//! sequence elements count is decided by a [`SizePolicy`] so the recursion
//! itself never changes.

use super::node::{Node, NodeKind};

/// How sequence elements that are not typed records are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCounting {
    /// Each element is counted by the normal rules (a scalar counts 1)
    Individually,
    /// Each element counts exactly 1, whatever it contains
    AsOneUnit,
}

/// Counting policy for the containers whose weight is a matter of choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SizePolicy {
    /// What a whole set contributes. Members are never visited.
    pub set_weight: usize,
    /// How untagged sequence elements are counted
    pub untagged_elements: ElementCounting,
}

impl SizePolicy {
    /// Sets are opaque and count 0; untagged sequence elements are counted
    /// individually.
    pub const DEFAULT: SizePolicy = SizePolicy {
        set_weight: 0,
        untagged_elements: ElementCounting::Individually,
    };
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Counts the addressable slots in the subtree rooted at `node`.
pub fn size(node: &Node, policy: &SizePolicy) -> usize {
    if node.is_cleared() {
        return 0;
    }
    match node.kind() {
        NodeKind::Leaf => 1,
        NodeKind::Record { .. } | NodeKind::Mapping => {
            node.children().iter().map(|child| size(child, policy)).sum()
        }
        NodeKind::Sequence => node
            .children()
            .iter()
            .map(|element| match (element.name(), policy.untagged_elements) {
                (None, ElementCounting::AsOneUnit) => 1,
                _ => size(element, policy),
            })
            .sum(),
        NodeKind::Set => policy.set_weight,
    }
}

/// Returns true if `node` has no live children.
pub fn is_empty(node: &Node) -> bool {
    node.children().iter().all(|child| child.is_cleared())
}
