//! Configuration adapter tests: reading, editing and writing through a codec

use std::{
    fs::File,
    io::{BufReader, BufWriter},
};

use arbor::{
    Configuration, TreeConfig,
    tree::Lookup,
    value::{Record, UniqueSet, Value},
};
use url::Url;

use crate::helpers::*;

fn configuration() -> Configuration<JsonCodec> {
    Configuration::new(JsonCodec, TreeConfig::default())
}

fn single(lookup: Option<Lookup>) -> Option<Value> {
    lookup.and_then(|lookup| lookup.single().cloned())
}

#[test]
fn test_unread_configuration_is_empty() {
    let config = configuration();

    assert!(config.is_empty());
    assert_eq!(config.size(), 0);
    assert!(config.tree().is_none());
    assert_eq!(config.get_property("name").unwrap(), None);
}

#[test]
fn test_read_empty_input_yields_empty_configuration() {
    let mut config = configuration();

    config.read(&b""[..]).unwrap();

    assert!(config.is_empty());
    assert!(config.tree().is_some());
}

#[test]
fn test_read_empty_root_record() {
    let mut config = configuration();
    let bytes = serde_json::to_vec(&Value::from(Record::typed("Configuration"))).unwrap();

    config.read(bytes.as_slice()).unwrap();

    assert!(config.is_empty());
}

#[test]
fn test_read_string_properties() {
    let mut config = configuration();
    let document = Value::from(Record::new().with("name", "Jane").with("lastName", "Doe"));

    config
        .read(serde_json::to_vec(&document).unwrap().as_slice())
        .unwrap();

    assert!(!config.is_empty());
    assert_eq!(single(config.get_property("name").unwrap()), Some(Value::from("Jane")));
    assert_eq!(single(config.get_property("lastName").unwrap()), Some(Value::from("Doe")));
}

#[test]
fn test_read_properties_of_every_type() {
    let mut config = configuration();

    config
        .read(serde_json::to_vec(&profile_document()).unwrap().as_slice())
        .unwrap();

    assert!(!config.is_empty());
    let get = |key: &str| single(config.get_property(key).unwrap());
    assert_eq!(get("authenticated"), Some(Value::from(true)));
    assert_eq!(get("sort"), Some(Value::from('d')));
    assert_eq!(get("name"), Some(Value::from("Jane Doe")));
    assert_eq!(get("account"), Some(Value::from("jane_doe@example.com")));
    assert_eq!(
        get("aliases"),
        Some(Value::from(["jdoe", "janed"].into_iter().collect::<UniqueSet>()))
    );
    assert_eq!(
        get("homePage"),
        Some(Value::from(Url::parse("http://www.example.com/jdoe/").unwrap()))
    );
    assert_eq!(get("salt"), Some(Value::from(b"foobar".to_vec())));
    assert_eq!(get("credits"), Some(Value::from(123)));
}

#[test]
fn test_read_rejects_non_record_root() {
    let mut config = configuration();
    config
        .read(serde_json::to_vec(&Value::from(Record::new().with("kept", 1))).unwrap().as_slice())
        .unwrap();

    let err = config
        .read(serde_json::to_vec(&Value::from("just text")).unwrap().as_slice())
        .unwrap_err();

    assert!(
        err.as_tree_error()
            .is_some_and(|tree_err| tree_err.is_malformed_document())
    );
    assert_eq!(single(config.get_property("kept").unwrap()), Some(Value::from(1)));
}

#[test]
fn test_read_reports_codec_errors() {
    let mut config = configuration();

    let err = config.read(&b"{ not json"[..]).unwrap_err();

    assert_eq!(err.module(), "codec");
}

#[test]
fn test_edit_before_read_creates_default_root() {
    let mut config = configuration();

    config.add_property("name", "Jane").unwrap();
    config.clear_property("missing").unwrap();

    assert_eq!(config.size(), 1);
    let mut out = Vec::new();
    config.write(&mut out).unwrap();
    let written: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        written,
        Value::from(Record::typed("Configuration").with("name", "Jane"))
    );
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("settings.json");

    let mut config = configuration();
    config.add_property("name", "Jane").unwrap();
    config.add_property("colors", Value::Sequence(Vec::new())).unwrap();
    config.add_property("colors.Color(-1).name", "red").unwrap();
    config
        .write(BufWriter::new(File::create(&file_path).unwrap()))
        .unwrap();

    let mut reloaded = configuration();
    reloaded
        .read(BufReader::new(File::open(&file_path).unwrap()))
        .unwrap();

    assert_eq!(reloaded.size(), 2);
    assert_eq!(
        single(reloaded.get_property("colors.Color(0).name").unwrap()),
        Some(Value::from("red"))
    );

    reloaded.clear_property("name").unwrap();
    assert_eq!(reloaded.get_property("name").unwrap(), None);
    assert_eq!(reloaded.size(), 1);
}
