//! Document value model tests

use arbor::value::{Mapping, Record, Scalar, UniqueSet, Value, ValueKind};

use crate::helpers::*;

#[test]
fn test_value_kind_discriminates_every_variant() {
    assert_eq!(Value::from("text").kind(), ValueKind::Scalar);
    assert_eq!(Value::from(Record::new()).kind(), ValueKind::Record);
    assert_eq!(Value::from(Mapping::new()).kind(), ValueKind::Mapping);
    assert_eq!(Value::Sequence(Vec::new()).kind(), ValueKind::Sequence);
    assert_eq!(Value::from(UniqueSet::new()).kind(), ValueKind::Set);
}

#[test]
fn test_scalar_conversions() {
    assert_eq!(Value::from(true), Value::Scalar(Scalar::Bool(true)));
    assert_eq!(Value::from(123), Value::Scalar(Scalar::Int(123)));
    assert_eq!(Value::from('d'), Value::Scalar(Scalar::Char('d')));
    assert_eq!(
        Value::from(b"foobar".to_vec()),
        Value::Scalar(Scalar::Bytes(vec![102, 111, 111, 98, 97, 114]))
    );
    assert_eq!(Value::from("Jane").type_name(), "text");
    assert!(Value::from("Jane") == "Jane");
    assert!(Value::from(123) == 123);
}

#[test]
fn test_record_accessors() {
    let profile = profile_document();
    let record = profile.as_record().expect("profile is a record");

    assert_eq!(record.type_tag(), Some("Configuration"));
    assert_eq!(record.len(), 9);
    assert_eq!(record.property("name"), Some(&Value::from("Jane Doe")));
    assert_eq!(record.property("credits").and_then(Value::as_int), Some(123));
    assert!(record.property("missing").is_none());
}

#[test]
fn test_record_remove_property() {
    let mut record = Record::new().with("a", 1).with("b", 2);

    assert_eq!(record.remove_property("a"), Some(Value::from(1)));
    assert_eq!(record.remove_property("a"), None);
    assert_eq!(record.len(), 1);
}

#[test]
fn test_sets_compare_without_order() {
    let left: UniqueSet = ["jdoe", "janed"].into_iter().collect();
    let right: UniqueSet = ["janed", "jdoe", "jdoe"].into_iter().collect();

    assert_eq!(right.len(), 2);
    assert_eq!(Value::from(left), Value::from(right));
}

#[test]
fn test_value_serde_round_trip() {
    let profile = profile_document();

    let json = serde_json::to_string(&profile).expect("serialize");
    let decoded: Value = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, profile);
}
