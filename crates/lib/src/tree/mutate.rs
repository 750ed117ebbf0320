//! Path-directed tree rewriting.
//!
//! [`mutate`] never edits a published node. It rebuilds the chain of
//! ancestors from the edited node up to the root and shares every other
//! subtree with the input tree, so the caller can keep reading the old root
//! until it swaps in the new one.

use std::sync::Arc;

use crate::{
    path::{Index, Path, Segment},
    value::Value,
};

use super::{
    build::build,
    errors::TreeError,
    node::{Node, NodeKind},
};

/// Applies `value` at `path` under `root` and returns the new root.
///
/// `value = None` deletes. Deleting a record property clears the slot in place;
/// deleting from a mapping or sequence removes the slot. A missing intermediate
/// node is only created when the next segment is an append (`name(-1)`).
///
/// # Errors
/// - [`TreeError::InvalidPath`] when a non-final plain segment does not match
///   exactly one child, a plain final segment is ambiguous, or the walk reaches
///   a leaf, set or cleared slot.
/// - [`TreeError::NotFound`] when an explicit index has no sibling.
/// - [`TreeError::UnsupportedValue`] when the append sentinel is used without a
///   record value, a non-record value is placed into a sequence, or a record's
///   type tag disagrees with the segment name.
pub fn mutate(root: &Node, path: &Path, value: Option<Value>) -> Result<Node, TreeError> {
    let operation = if value.is_some() { "set" } else { "delete" };
    tracing::debug!(path = %path, operation, "Applying mutation");

    rewrite(root, path.segments(), value, path).inspect_err(|err| {
        tracing::debug!(path = %path, operation, error = %err, "Mutation rejected");
    })
}

/// Rewrites `parent` so that `segments` (relative to it) reflect the edit.
fn rewrite(
    parent: &Node,
    segments: &[Segment],
    value: Option<Value>,
    path: &Path,
) -> Result<Node, TreeError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Err(invalid_path(path, "path has no segments"));
    };

    if !parent.is_navigable() {
        return Err(invalid_path(
            path,
            format!(
                "cannot step into '{}' at '{segment}': {}",
                parent.name().unwrap_or("(root)"),
                describe(parent)
            ),
        ));
    }

    if rest.is_empty() {
        return rewrite_last(parent, segment, value, path);
    }

    let name = segment.name();
    let mut children = parent.children().to_vec();

    match segment.index() {
        Some(Index::Append) => {
            let fresh = Node::empty_record(Some(name.to_string()), Some(name.to_string()));
            let filled = rewrite(&fresh, rest, value, path)?;
            insert_after_run(&mut children, name, Arc::new(filled));
        }
        Some(Index::At(index)) => {
            let position = nth_named(parent, name, index)
                .ok_or_else(|| not_found(path, segment, index))?;
            let updated = rewrite(&children[position], rest, value, path)?;
            children[position] = Arc::new(updated);
        }
        None => {
            let positions = positions_named(parent, name);
            match positions.as_slice() {
                [position] => {
                    let updated = rewrite(&children[*position], rest, value, path)?;
                    children[*position] = Arc::new(updated);
                }
                [] if rest.first().is_some_and(Segment::is_append) => {
                    // Records inside a sequence are named by their type tag.
                    let type_tag =
                        matches!(parent.kind(), NodeKind::Sequence).then(|| name.to_string());
                    let fresh = Node::empty_record(Some(name.to_string()), type_tag);
                    children.push(Arc::new(rewrite(&fresh, rest, value, path)?));
                }
                [] => {
                    return Err(invalid_path(
                        path,
                        format!("no child named '{name}'; only the segment before an append index is created"),
                    ));
                }
                _ => {
                    return Err(invalid_path(
                        path,
                        format!("'{name}' matches {} children; use an index", positions.len()),
                    ));
                }
            }
        }
    }

    Ok(parent.with_children(children))
}

/// Applies the edit for the final segment among `parent`'s children.
fn rewrite_last(
    parent: &Node,
    segment: &Segment,
    value: Option<Value>,
    path: &Path,
) -> Result<Node, TreeError> {
    let name = segment.name();
    let mut children = parent.children().to_vec();

    match segment.index() {
        Some(Index::Append) => {
            let Some(value) = value else {
                return Err(unsupported(path, "the append index needs a record value, not a delete"));
            };
            if !matches!(value, Value::Record(_)) {
                return Err(unsupported(
                    path,
                    format!("the append index needs a record value, found {}", value.type_name()),
                ));
            }
            // Appended records follow the sequence naming rule wherever they land.
            let child = place(&NodeKind::Sequence, name, value, path)?;
            insert_after_run(&mut children, name, Arc::new(child));
        }
        Some(Index::At(index)) => {
            let position = nth_named(parent, name, index)
                .ok_or_else(|| not_found(path, segment, index))?;
            match value {
                Some(value) => children[position] = Arc::new(place(parent.kind(), name, value, path)?),
                None => {
                    children.remove(position);
                }
            }
        }
        None => {
            let positions = positions_named(parent, name);
            match (positions.as_slice(), value) {
                ([], Some(value)) => children.push(Arc::new(place(parent.kind(), name, value, path)?)),
                ([], None) => {
                    tracing::debug!(path = %path, "Nothing to delete");
                    return Ok(parent.clone());
                }
                ([position], Some(value)) => {
                    children[*position] = Arc::new(place(parent.kind(), name, value, path)?);
                }
                ([position], None) => {
                    if parent.kind().is_record() {
                        children[*position] = Arc::new(children[*position].cleared());
                    } else {
                        children.remove(*position);
                    }
                }
                (_, _) => {
                    return Err(invalid_path(
                        path,
                        format!("'{name}' matches {} children; use an index", positions.len()),
                    ));
                }
            }
        }
    }

    Ok(parent.with_children(children))
}

/// Builds the child node for `value` under a parent of kind `parent_kind`.
///
/// Sequence children built from records are named by the record's type tag,
/// so an untagged record takes the segment name as its tag and a differing
/// tag is rejected. Other sequence elements are unnamed, so they cannot be
/// placed through a named segment.
fn place(parent_kind: &NodeKind, name: &str, value: Value, path: &Path) -> Result<Node, TreeError> {
    let value = match (parent_kind, value) {
        (NodeKind::Sequence, value) if !matches!(value, Value::Record(_)) => {
            return Err(unsupported(
                path,
                format!(
                    "sequence element '{name}' must be a record, found {}",
                    value.type_name()
                ),
            ));
        }
        (NodeKind::Sequence, Value::Record(mut record)) => {
            if let Some(tag) = record.type_tag().filter(|tag| *tag != name) {
                return Err(unsupported(
                    path,
                    format!("record type tag '{tag}' does not match segment '{name}'"),
                ));
            }
            if record.type_tag().is_none() {
                record.set_type_tag(Some(name.to_string()));
            }
            Value::Record(record)
        }
        (_, value) => value,
    };
    Ok(build(Some(name.to_string()), value))
}

/// Inserts `child` right after the last sibling called `name`, or at the end
/// when there is none.
fn insert_after_run(children: &mut Vec<Arc<Node>>, name: &str, child: Arc<Node>) {
    match children.iter().rposition(|sibling| sibling.name() == Some(name)) {
        Some(last) => children.insert(last + 1, child),
        None => children.push(child),
    }
}

fn positions_named(parent: &Node, name: &str) -> Vec<usize> {
    parent.children_named(name).map(|(position, _)| position).collect()
}

fn nth_named(parent: &Node, name: &str, index: usize) -> Option<usize> {
    parent.children_named(name).nth(index).map(|(position, _)| position)
}

fn describe(node: &Node) -> &'static str {
    if node.is_cleared() {
        return "the slot was cleared";
    }
    match node.kind() {
        NodeKind::Leaf => "it is a leaf value",
        NodeKind::Set => "set members are not addressable",
        _ => "it has no addressable children",
    }
}

fn invalid_path(path: &Path, reason: impl Into<String>) -> TreeError {
    TreeError::InvalidPath {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn unsupported(path: &Path, reason: impl Into<String>) -> TreeError {
    TreeError::UnsupportedValue {
        path: path.to_string(),
        reason: reason.into(),
    }
}

fn not_found(path: &Path, segment: &Segment, index: usize) -> TreeError {
    TreeError::NotFound {
        path: path.to_string(),
        segment: segment.name().to_string(),
        index,
    }
}
