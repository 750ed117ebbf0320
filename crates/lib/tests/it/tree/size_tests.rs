//! Size and emptiness tests

use arbor::{
    Tree, TreeConfig,
    tree::{ElementCounting, SizePolicy, size::size},
    value::{Mapping, Record, UniqueSet, Value},
};

use crate::helpers::*;

#[test]
fn test_empty_tree() {
    let tree = empty_tree();

    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
}

#[test]
fn test_leaves_count_one_each() {
    let tree = load(
        Record::new()
            .with("name", "Jane")
            .with("lastName", "Doe")
            .into(),
    );

    assert!(!tree.is_empty());
    assert_eq!(tree.size(), 2);
}

#[test]
fn test_set_is_opaque() {
    let members: UniqueSet = (1..=5).map(Value::from).collect();
    let tree = load(Record::new().with("numbers", members).into());

    assert_eq!(tree.size(), 0);
    // The set is still a live child, so the tree is not empty.
    assert!(!tree.is_empty());
}

#[test]
fn test_profile_size_excludes_set() {
    let tree = load(profile_document());

    // Nine properties, one of which is the opaque alias set.
    assert_eq!(tree.size(), 8);
}

#[test]
fn test_sequences_count_their_elements() {
    let tree = load(
        Record::new()
            .with("tags", vec![Value::from("a"), Value::from("b"), Value::from("c")])
            .with(
                "colors",
                vec![
                    Value::from(Record::typed("Color").with("name", "red").with("hex", "f00")),
                    Value::from(Record::typed("Color").with("name", "blue")),
                ],
            )
            .into(),
    );

    assert_eq!(tree.size(), 3 + 3);
}

#[test]
fn test_size_is_sum_over_children() {
    let tree = load(
        Record::new()
            .with("a", 1)
            .with("b", Record::new().with("c", 2).with("d", vec![Value::from(3)]))
            .with("e", Mapping::new().with("f", 4).with("g", 5))
            .with("h", ["x"].into_iter().collect::<UniqueSet>())
            .into(),
    );

    let policy = SizePolicy::default();
    let total: usize = tree
        .root()
        .children()
        .iter()
        .map(|child| size(child, &policy))
        .sum();
    assert_eq!(tree.size(), total);
    assert_eq!(total, 5);
}

#[test]
fn test_clearing_subtracts_leaf_slots() {
    let mut tree = load(
        Record::new()
            .with("a", 1)
            .with("b", Record::new().with("c", 2).with("d", 3))
            .into(),
    );
    assert_eq!(tree.size(), 3);

    tree.remove("b").unwrap();
    assert_eq!(tree.size(), 1);

    tree.remove("a").unwrap();
    assert_eq!(tree.size(), 0);
    assert!(tree.is_empty());
}

#[test]
fn test_custom_policy_counts_sets_and_untagged_units() {
    let policy = SizePolicy {
        set_weight: 1,
        untagged_elements: ElementCounting::AsOneUnit,
    };
    let config = TreeConfig::default().with_size_policy(policy);
    let document = Record::new()
        .with("aliases", ["a", "b"].into_iter().collect::<UniqueSet>())
        .with(
            "rows",
            vec![
                Value::from(Record::new().with("x", 1).with("y", 2)),
                Value::from(Record::typed("Row").with("x", 1).with("y", 2)),
            ],
        );

    let tree = Tree::load(Some(document.into()), &config).unwrap();

    assert_eq!(tree.size_policy(), &policy);
    // set = 1, untagged record = 1, tagged record = 2
    assert_eq!(tree.size(), 4);
}
