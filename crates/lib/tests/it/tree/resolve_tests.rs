//! Path resolution tests

use arbor::{
    tree::{Lookup, resolve::resolve},
    value::{Record, UniqueSet, Value},
};

use crate::helpers::*;

#[test]
fn test_get_top_level_properties() {
    let tree = load(profile_document());

    assert_eq!(get_single(&tree, "name"), Some(Value::from("Jane Doe")));
    assert_eq!(get_single(&tree, "authenticated"), Some(Value::from(true)));
    assert_eq!(get_single(&tree, "sort"), Some(Value::from('d')));
    assert_eq!(get_single(&tree, "credits"), Some(Value::from(123)));
    assert_eq!(
        get_single(&tree, "aliases"),
        Some(Value::from(["janed", "jdoe"].into_iter().collect::<UniqueSet>()))
    );
}

#[test]
fn test_missing_path_is_absent() {
    let tree = load(profile_document());

    assert_eq!(tree.get("missing").unwrap(), None);
    assert_eq!(tree.get("name.deeper").unwrap(), None);
}

#[test]
fn test_indexed_segments_select_among_siblings() {
    let tree = load(colors_document(&["red", "green", "blue"]));

    assert_eq!(get_single(&tree, "colors.Color(0).name"), Some(Value::from("red")));
    assert_eq!(get_single(&tree, "colors.Color(2).name"), Some(Value::from("blue")));
    assert_eq!(get_single(&tree, "colors.Color(3).name"), None);
}

#[test]
fn test_plain_segment_matching_several_children_yields_multiple() {
    let tree = load(colors_document(&["red", "green"]));

    let lookup = tree.get("colors.Color.name").unwrap();
    assert_eq!(
        lookup,
        Some(Lookup::Multiple(vec![Value::from("red"), Value::from("green")]))
    );
    assert_eq!(lookup.as_ref().and_then(Lookup::single), None);
}

#[test]
fn test_whole_record_is_returned_as_value() {
    let tree = load(colors_document(&["red"]));

    assert_eq!(
        get_single(&tree, "colors.Color(0)"),
        Some(Value::from(Record::typed("Color").with("name", "red")))
    );
}

#[test]
fn test_set_members_are_not_addressable() {
    let tree = load(profile_document());

    let nodes = resolve(tree.root(), &path("aliases.jdoe"));
    assert!(nodes.is_empty());
}

#[test]
fn test_append_sentinel_never_resolves() {
    let tree = load(colors_document(&["red"]));

    assert_eq!(tree.get("colors.Color(-1)").unwrap(), None);
}

#[test]
fn test_untagged_sequence_elements_are_not_addressable() {
    let tree = load(
        Record::new()
            .with("tags", vec![Value::from("x"), Value::from("y")])
            .into(),
    );

    assert_eq!(get_single(&tree, "tags").and_then(|v| v.as_sequence().map(<[Value]>::len)), Some(2));
    assert!(resolve(tree.root(), &path("tags.x")).is_empty());
}

#[test]
fn test_malformed_path_is_an_error() {
    let tree = load(profile_document());

    let err = tree.get("colors.Color(x)").unwrap_err();
    assert!(err.is_invalid_path());
    assert_eq!(err.module(), "path");
}
