//! Document value model.
//!
//! This module provides the interchange shape exchanged with a document codec.
//! A document is a tree of [`Value`]s: scalars at the leaves, and four kinds of
//! containers above them.
//!
//! # Value Types
//!
//! - [`Value::Scalar`] - An opaque leaf ([`Scalar`]) compared by value
//! - [`Value::Record`] - A typed structure with ordered, uniquely named properties
//! - [`Value::Mapping`] - An untyped key-value container
//! - [`Value::Sequence`] - An ordered list that permits duplicates
//! - [`Value::Set`] - An unordered collection of distinct values ([`UniqueSet`])
//!
//! Values carry no behavior beyond variant discrimination and accessors; the
//! addressable form of a document lives in [`crate::tree`].

use std::{collections::HashMap, fmt};

use chrono::NaiveDate;
use url::Url;
use uuid::Uuid;

/// An opaque leaf value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Scalar {
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Single character
    Char(char),
    /// UTF-8 text (also used for email addresses and other string-like values)
    Text(String),
    /// Raw byte sequence
    Bytes(#[serde(with = "serde_bytes")] Vec<u8>),
    /// Calendar date without a time zone
    Date(NaiveDate),
    /// Identifier
    Uuid(Uuid),
    /// URI reference
    Uri(Url),
}

impl Scalar {
    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Char(_) => "char",
            Scalar::Text(_) => "text",
            Scalar::Bytes(_) => "bytes",
            Scalar::Date(_) => "date",
            Scalar::Uuid(_) => "uuid",
            Scalar::Uri(_) => "uri",
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(x) => write!(f, "{x}"),
            Scalar::Char(c) => write!(f, "'{c}'"),
            Scalar::Text(s) => write!(f, "\"{s}\""),
            Scalar::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
            Scalar::Date(date) => write!(f, "{date}"),
            Scalar::Uuid(uuid) => write!(f, "{uuid}"),
            Scalar::Uri(uri) => write!(f, "<{uri}>"),
        }
    }
}

/// A typed structured value.
///
/// Properties keep their insertion order. [`Record::set_property`] keeps names
/// unique by replacing an existing property in place.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    type_tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Url>,
    #[serde(default)]
    properties: Vec<(String, Value)>,
}

impl Record {
    /// Creates a new untyped record with no properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new record with the given type tag
    pub fn typed(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: Some(type_tag.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the record identifier
    pub fn with_id(mut self, id: Url) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder method to set a property and return self
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Returns the type tag, if any
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    /// Replaces the type tag
    pub fn set_type_tag(&mut self, type_tag: Option<String>) {
        self.type_tag = type_tag;
    }

    /// Returns the identifier, if any
    pub fn id(&self) -> Option<&Url> {
        self.id.as_ref()
    }

    /// Replaces the identifier
    pub fn set_id(&mut self, id: Option<Url>) {
        self.id = id;
    }

    /// Gets a property by name
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Sets a property, returns the old value if present.
    ///
    /// An existing property keeps its position.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.properties.push((name, value));
                None
            }
        }
    }

    /// Removes a property, returns its value if present
    pub fn remove_property(&mut self, name: &str) -> Option<Value> {
        let position = self.properties.iter().position(|(key, _)| key == name)?;
        Some(self.properties.remove(position).1)
    }

    /// Appends a property without checking for an existing one of the same name.
    ///
    /// Used when flattening a tree whose record nodes gained duplicate children
    /// through the append sentinel; the duplicates are kept in order.
    pub(crate) fn push_property(&mut self, name: String, value: Value) {
        self.properties.push((name, value));
    }

    /// Returns an iterator over the properties in order
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Splits the record into its type tag, identifier and properties
    pub fn into_parts(self) -> (Option<String>, Option<Url>, Vec<(String, Value)>) {
        (self.type_tag, self.id, self.properties)
    }

    /// Returns the number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the record has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// An untyped key-value container.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: HashMap<String, Value>,
}

impl Mapping {
    /// Creates a new empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to insert an entry and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Gets an entry by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Inserts an entry, returns the old value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes an entry, returns its value if present
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns an iterator over the entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = std::collections::hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<HashMap<String, Value>> for Mapping {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Value)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// An unordered collection of distinct values.
///
/// Equality ignores element order. Inserting a value equal to an existing
/// member is a no-op.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct UniqueSet {
    elements: Vec<Value>,
}

impl UniqueSet {
    /// Creates a new empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, returns false if an equal value was already present
    pub fn insert(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.elements.contains(&value) {
            return false;
        }
        self.elements.push(value);
        true
    }

    /// Returns true if the set contains a value equal to `value`
    pub fn contains(&self, value: &Value) -> bool {
        self.elements.contains(value)
    }

    /// Returns an iterator over the members in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.elements.iter()
    }

    /// Returns the number of members
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set has no members
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl PartialEq for UniqueSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.elements.iter().all(|value| other.contains(value))
    }
}

impl From<Vec<Value>> for UniqueSet {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl From<UniqueSet> for Vec<Value> {
    fn from(set: UniqueSet) -> Self {
        set.elements
    }
}

impl<V: Into<Value>> FromIterator<V> for UniqueSet {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut set = UniqueSet::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

/// Discriminator over the [`Value`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Scalar,
    Record,
    Mapping,
    Sequence,
    Set,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Record => "record",
            ValueKind::Mapping => "mapping",
            ValueKind::Sequence => "sequence",
            ValueKind::Set => "set",
        };
        f.write_str(name)
    }
}

/// A document value.
///
/// # Direct Comparisons
///
/// `Value` implements `PartialEq` with a few primitive types:
///
/// ```
/// # use arbor::value::Value;
/// assert!(Value::from("hello") == "hello");
/// assert!(Value::from(42) == 42);
/// assert!(Value::from(true) == true);
/// assert!(!(Value::from(42) == "42"));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    /// Opaque leaf value
    Scalar(Scalar),
    /// Typed structure with ordered properties
    Record(Record),
    /// Untyped key-value container
    Mapping(Mapping),
    /// Ordered list, duplicates allowed
    Sequence(Vec<Value>),
    /// Unordered collection of distinct values
    Set(UniqueSet),
}

impl Value {
    /// Returns the variant discriminator
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Record(_) => ValueKind::Record,
            Value::Mapping(_) => ValueKind::Mapping,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Set(_) => ValueKind::Set,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Scalar(scalar) => scalar.type_name(),
            Value::Record(_) => "record",
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::Set(_) => "set",
        }
    }

    /// Returns true if this is a scalar value
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Attempts to convert to a scalar
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Scalar(Scalar::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Attempts to convert to a record
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Attempts to convert to a mapping
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Attempts to convert to a sequence
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(elements) => Some(elements),
            _ => None,
        }
    }

    /// Attempts to convert to a set
    pub fn as_set(&self) -> Option<&UniqueSet> {
        match self {
            Value::Set(set) => Some(set),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => write!(f, "{scalar}"),
            Value::Record(record) => {
                if let Some(tag) = record.type_tag() {
                    write!(f, "*{tag}")?;
                }
                write!(f, ":(")?;
                for (i, (name, value)) in record.properties().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}={value}")?;
                }
                write!(f, ")")
            }
            Value::Mapping(mapping) => {
                write!(f, "{{")?;
                for (i, (key, value)) in mapping.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Sequence(elements) => {
                write!(f, "[")?;
                for (i, value) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, "]")
            }
            Value::Set(set) => {
                write!(f, "<")?;
                for (i, value) in set.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ">")
            }
        }
    }
}

// Convenient From implementations for common types
impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Scalar(Scalar::Int(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Scalar(Scalar::Int(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Scalar(Scalar::Int(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Scalar(Scalar::Float(value))
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Scalar(Scalar::Char(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::Text(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::Text(value.to_string()))
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Scalar(Scalar::Bytes(value))
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Scalar(Scalar::Date(value))
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Scalar(Scalar::Uuid(value))
    }
}

impl From<Url> for Value {
    fn from(value: Url) -> Self {
        Value::Scalar(Scalar::Uri(value))
    }
}

impl From<Record> for Value {
    fn from(value: Record) -> Self {
        Value::Record(value)
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<UniqueSet> for Value {
    fn from(value: UniqueSet) -> Self {
        Value::Set(value)
    }
}

// PartialEq implementations for comparing Value with other types
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(*other as i64)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
