use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashSet};

use crate::digest::Digest;
use crate::errors::NormalizationError;
use crate::hasher;
use crate::number::Number;

/// Type tags prefixed to every encoding before hashing.
pub mod tag {
    /// `Null`.
    pub const NULL: u8 = b'n';
    /// `Bool`.
    pub const BOOL: u8 = b'b';
    /// `UnicodeString`.
    pub const UNICODE: u8 = b'u';
    /// `Number`.
    pub const NUMBER: u8 = b'f';
    /// `RawBytes`.
    pub const RAW_BYTES: u8 = b'r';
    /// `List`.
    pub const LIST: u8 = b'l';
    /// `Dict`.
    pub const DICT: u8 = b'd';
    /// `Set`.
    pub const SET: u8 = b's';
}

/// The closed set of values the hasher understands.
///
/// Equality is structural. Two `Set`s holding the same members in a different
/// order compare unequal here but always share a digest.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Text, hashed as its exact UTF-8 bytes (no Unicode normalization).
    UnicodeString(String),
    /// Finite double; integers and floats are not distinguished.
    Number(Number),
    /// Binary data that is not text.
    RawBytes(Vec<u8>),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Mapping with unique string keys.
    Dict(BTreeMap<String, Value>),
    /// Unordered collection; members with equal digests are one member.
    Set(Vec<Value>),
}

impl Value {
    /// Builds a `Dict`, rejecting repeated keys.
    pub fn dict_from_entries<I>(entries: I) -> Result<Value, NormalizationError>
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            match map.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(slot) => {
                    return Err(NormalizationError::DuplicateKey {
                        key: slot.key().clone(),
                        path: "root".to_string(),
                    });
                }
            }
        }
        Ok(Value::Dict(map))
    }

    /// Builds a `Set`, keeping the first member of each digest.
    pub fn set<I>(members: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        let mut seen = HashSet::new();
        let members = members
            .into_iter()
            .filter(|member| seen.insert(member.digest()))
            .collect();
        Value::Set(members)
    }

    /// Tag byte for this variant.
    pub fn tag(&self) -> u8 {
        match self {
            Value::Null => tag::NULL,
            Value::Bool(_) => tag::BOOL,
            Value::UnicodeString(_) => tag::UNICODE,
            Value::Number(_) => tag::NUMBER,
            Value::RawBytes(_) => tag::RAW_BYTES,
            Value::List(_) => tag::LIST,
            Value::Dict(_) => tag::DICT,
            Value::Set(_) => tag::SET,
        }
    }

    /// Variant name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::UnicodeString(_) => "string",
            Value::Number(_) => "number",
            Value::RawBytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Set(_) => "set",
        }
    }

    /// Object hash of this value. See [`hasher::digest`] for the nesting bound.
    pub fn digest(&self) -> Digest {
        hasher::digest(self)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::UnicodeString(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::UnicodeString(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dict_rejects_repeated_keys() {
        let err = Value::dict_from_entries(vec![
            ("a".to_string(), Value::Null),
            ("b".to_string(), Value::Null),
            ("a".to_string(), Value::Bool(true)),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            NormalizationError::DuplicateKey {
                key: "a".into(),
                path: "root".into()
            }
        );
    }

    #[test]
    fn set_collapses_equal_digests() {
        let set = Value::set(vec![
            Value::from("x"),
            Value::Number(Number::from_i64(1)),
            Value::from("x"),
            Value::Number(Number::new(1.0).unwrap()),
        ]);
        match set {
            Value::Set(members) => assert_eq!(members.len(), 2),
            other => panic!("expected set, got {:?}", other),
        }
    }

    #[test]
    fn tags_are_distinct() {
        let values = [
            Value::Null,
            Value::Bool(false),
            Value::from(""),
            Value::Number(Number::from_i64(0)),
            Value::RawBytes(vec![]),
            Value::List(vec![]),
            Value::Dict(BTreeMap::new()),
            Value::Set(vec![]),
        ];
        let tags: HashSet<u8> = values.iter().map(Value::tag).collect();
        assert_eq!(tags.len(), values.len());
    }
}
