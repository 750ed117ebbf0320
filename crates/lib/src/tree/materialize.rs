//! Node tree → value model, the inverse of [`super::build`].

use crate::value::{Mapping, Record, UniqueSet, Value};

use super::node::{Node, NodeKind};

/// Flattens the subtree rooted at `node` back into a [`Value`].
///
/// Returns `None` only for a cleared slot. Cleared children are skipped, so a
/// record whose property was cleared materializes without that property.
///
/// Record children keep their order, including duplicate names created by the
/// append sentinel. Mapping children with duplicate names collapse to the last
/// one.
pub fn materialize(node: &Node) -> Option<Value> {
    if node.is_cleared() {
        return None;
    }
    let children = node.children();

    let value = match node.kind() {
        NodeKind::Leaf => Value::Scalar(node.scalar()?.clone()),
        NodeKind::Record { type_tag, id } => {
            let mut record = Record::new();
            record.set_type_tag(type_tag.clone());
            record.set_id(id.clone());
            for child in children {
                if let Some(value) = materialize(child) {
                    record.push_property(child.name().unwrap_or_default().to_string(), value);
                }
            }
            Value::Record(record)
        }
        NodeKind::Mapping => {
            let mut mapping = Mapping::new();
            for child in children {
                if let Some(value) = materialize(child) {
                    mapping.insert(child.name().unwrap_or_default(), value);
                }
            }
            Value::Mapping(mapping)
        }
        NodeKind::Sequence => {
            Value::Sequence(children.iter().filter_map(|child| materialize(child)).collect())
        }
        NodeKind::Set => Value::Set(
            children
                .iter()
                .filter_map(|child| materialize(child))
                .collect::<UniqueSet>(),
        ),
    };
    Some(value)
}
