//! Value model → node tree.

use std::sync::Arc;

use crate::value::Value;

use super::node::{Node, NodeKind};

/// Builds the node subtree for `value`, naming its root `name`.
///
/// - Record properties become children named after the property.
/// - Mapping entries become children named after the key.
/// - Sequence elements become children named with the element's type tag when
///   the element is a typed record, and unnamed otherwise.
/// - Set members become unnamed children.
///
/// The value is consumed so scalars move into the tree without copying.
pub fn build(name: Option<String>, value: Value) -> Node {
    match value {
        Value::Scalar(scalar) => Node::leaf(name, scalar),
        Value::Record(record) => {
            let (type_tag, id, properties) = record.into_parts();
            let children = properties
                .into_iter()
                .map(|(key, value)| Arc::new(build(Some(key), value)))
                .collect();
            Node::container(name, NodeKind::Record { type_tag, id }, children)
        }
        Value::Mapping(mapping) => {
            let children = mapping
                .into_iter()
                .map(|(key, value)| Arc::new(build(Some(key), value)))
                .collect();
            Node::container(name, NodeKind::Mapping, children)
        }
        Value::Sequence(elements) => {
            let children = elements
                .into_iter()
                .map(|element| {
                    let element_name = element
                        .as_record()
                        .and_then(|record| record.type_tag())
                        .map(str::to_string);
                    Arc::new(build(element_name, element))
                })
                .collect();
            Node::container(name, NodeKind::Sequence, children)
        }
        Value::Set(set) => {
            let children = Vec::<Value>::from(set)
                .into_iter()
                .map(|member| Arc::new(build(None, member)))
                .collect();
            Node::container(name, NodeKind::Set, children)
        }
    }
}
