//! Classification of native Rust values.
//!
//! Any `T: Serialize` maps onto the value model through [`Classifier`], a closed
//! `serde::Serializer`:
//!
//! | serde data model                 | value                         |
//! |----------------------------------|-------------------------------|
//! | bool                             | `Bool`                        |
//! | i8..i128, u8..u128               | `Number` (lossy above 2^53)   |
//! | f32, f64                         | `Number` (NaN/inf rejected)   |
//! | char, str, unit variant          | `UnicodeString`               |
//! | bytes                            | `RawBytes`                    |
//! | unit, unit struct, `None`        | `Null`                        |
//! | seq, tuple, tuple struct         | `List`                        |
//! | map, struct                      | `Dict`                        |
//! | newtype/tuple/struct variant     | one-entry `Dict` by variant   |
//!
//! Map keys must be strings, chars, unit variants or integers (written in decimal).
//! Anything else is an [`ObjectHashError::UnsupportedType`] naming the key's Rust
//! type. Wrap a collection in
//! [`Set`] to hash it as unordered, and raw binary in [`Bytes`].

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use serde::ser::{self, Impossible, Serialize};

use crate::errors::{NormalizationError, ObjectHashError};
use crate::number::Number;
use crate::path::Path;
use crate::value::Value;

const SET_MARKER: &str = "$objecthash::private::Set";

/// Marks a collection as unordered.
///
/// Classified as [`Value::Set`]; other serializers see a plain sequence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Set<T>(pub Vec<T>);

impl<T> Set<T> {
    /// An empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }
}

impl<T> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(SET_MARKER, &self.0)
    }
}

/// Marks binary data, classified as [`Value::RawBytes`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bytes(pub Vec<u8>);

impl Serialize for Bytes {
    fn serialize<S: ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

/// Serializer producing a [`Value`].
#[derive(Debug, Clone)]
pub struct Classifier {
    max_depth: usize,
    depth: usize,
    path: Path,
}

impl Classifier {
    /// Classifier for a top-level value.
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            depth: 0,
            path: Path::root(),
        }
    }

    fn nested(&self) -> Result<Self, ObjectHashError> {
        let depth = self.depth + 1;
        if depth > self.max_depth {
            return Err(ObjectHashError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        Ok(Self {
            max_depth: self.max_depth,
            depth,
            path: self.path.clone(),
        })
    }

    fn at_field(&self, field: &str) -> Self {
        Self {
            max_depth: self.max_depth,
            depth: self.depth,
            path: self.path.push_field(field),
        }
    }

    fn at_index(&self, index: usize) -> Self {
        Self {
            max_depth: self.max_depth,
            depth: self.depth,
            path: self.path.push_index(index),
        }
    }
}

fn single_entry(key: &str, value: Value) -> Value {
    let mut map = BTreeMap::new();
    map.insert(key.to_string(), value);
    Value::Dict(map)
}

impl ser::Serializer for Classifier {
    type Ok = Value;
    type Error = ObjectHashError;

    type SerializeSeq = SeqClassifier;
    type SerializeTuple = SeqClassifier;
    type SerializeTupleStruct = SeqClassifier;
    type SerializeTupleVariant = TupleVariantClassifier;
    type SerializeMap = MapClassifier;
    type SerializeStruct = MapClassifier;
    type SerializeStructVariant = StructVariantClassifier;

    fn serialize_bool(self, v: bool) -> Result<Value, ObjectHashError> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, ObjectHashError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, ObjectHashError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, ObjectHashError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, ObjectHashError> {
        Ok(Value::Number(Number::from_i64(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, ObjectHashError> {
        Ok(Value::Number(Number::from_i128(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value, ObjectHashError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, ObjectHashError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, ObjectHashError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, ObjectHashError> {
        Ok(Value::Number(Number::from_u64(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, ObjectHashError> {
        Ok(Value::Number(Number::from_u128(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value, ObjectHashError> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, ObjectHashError> {
        Number::new(v).map(Value::Number).ok_or_else(|| {
            NormalizationError::NonFiniteNumber {
                path: self.path.to_string(),
            }
            .into()
        })
    }

    fn serialize_char(self, v: char) -> Result<Value, ObjectHashError> {
        Ok(Value::UnicodeString(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, ObjectHashError> {
        Ok(Value::UnicodeString(v.to_owned()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, ObjectHashError> {
        Ok(Value::RawBytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value, ObjectHashError> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, ObjectHashError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value, ObjectHashError> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value, ObjectHashError> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, ObjectHashError> {
        Ok(Value::UnicodeString(variant.to_owned()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<Value, ObjectHashError> {
        if name != SET_MARKER {
            return value.serialize(self);
        }
        // `Set<T>` always hands over a `Vec`; only a hand-written impl reusing the
        // marker can reach the error arm.
        match value.serialize(self)? {
            Value::List(members) => Ok(Value::set(members)),
            other => Err(ObjectHashError::UnsupportedType {
                type_name: format!("set of {}", other.type_name()),
            }),
        }
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, ObjectHashError> {
        let inner = value.serialize(self.nested()?.at_field(variant))?;
        Ok(single_entry(variant, inner))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqClassifier, ObjectHashError> {
        Ok(SeqClassifier::new(self.nested()?, len))
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqClassifier, ObjectHashError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqClassifier, ObjectHashError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<TupleVariantClassifier, ObjectHashError> {
        let items = self.nested()?.at_field(variant).nested()?;
        Ok(TupleVariantClassifier {
            variant,
            seq: SeqClassifier::new(items, Some(len)),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapClassifier, ObjectHashError> {
        Ok(MapClassifier::new(self.nested()?))
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<MapClassifier, ObjectHashError> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<StructVariantClassifier, ObjectHashError> {
        let fields = self.nested()?.at_field(variant).nested()?;
        Ok(StructVariantClassifier {
            variant,
            map: MapClassifier::new(fields),
        })
    }
}

/// Collects sequence elements into a `List`.
#[doc(hidden)]
pub struct SeqClassifier {
    inner: Classifier,
    items: Vec<Value>,
}

impl SeqClassifier {
    fn new(inner: Classifier, len: Option<usize>) -> Self {
        Self {
            inner,
            items: Vec::with_capacity(len.unwrap_or(0)),
        }
    }

    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ObjectHashError> {
        let item = value.serialize(self.inner.at_index(self.items.len()))?;
        self.items.push(item);
        Ok(())
    }
}

impl ser::SerializeSeq for SeqClassifier {
    type Ok = Value;
    type Error = ObjectHashError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), ObjectHashError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, ObjectHashError> {
        Ok(Value::List(self.items))
    }
}

impl ser::SerializeTuple for SeqClassifier {
    type Ok = Value;
    type Error = ObjectHashError;

    fn serialize_element<T: ?Sized + Serialize>(
        &mut self,
        value: &T,
    ) -> Result<(), ObjectHashError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, ObjectHashError> {
        Ok(Value::List(self.items))
    }
}

impl ser::SerializeTupleStruct for SeqClassifier {
    type Ok = Value;
    type Error = ObjectHashError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ObjectHashError> {
        self.push(value)
    }

    fn end(self) -> Result<Value, ObjectHashError> {
        Ok(Value::List(self.items))
    }
}

/// Collects tuple variant fields into `{variant: [..]}`.
#[doc(hidden)]
pub struct TupleVariantClassifier {
    variant: &'static str,
    seq: SeqClassifier,
}

impl ser::SerializeTupleVariant for TupleVariantClassifier {
    type Ok = Value;
    type Error = ObjectHashError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ObjectHashError> {
        self.seq.push(value)
    }

    fn end(self) -> Result<Value, ObjectHashError> {
        Ok(single_entry(self.variant, Value::List(self.seq.items)))
    }
}

/// Collects map entries and struct fields into a `Dict`.
#[doc(hidden)]
pub struct MapClassifier {
    inner: Classifier,
    entries: BTreeMap<String, Value>,
    pending_key: Option<String>,
}

impl MapClassifier {
    fn new(inner: Classifier) -> Self {
        Self {
            inner,
            entries: BTreeMap::new(),
            pending_key: None,
        }
    }

    fn insert<T: ?Sized + Serialize>(
        &mut self,
        key: String,
        value: &T,
    ) -> Result<(), ObjectHashError> {
        let value = value.serialize(self.inner.at_field(&key))?;
        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
            Entry::Occupied(slot) => Err(NormalizationError::DuplicateKey {
                key: slot.key().clone(),
                path: self.inner.path.to_string(),
            }
            .into()),
        }
    }
}

impl ser::SerializeMap for MapClassifier {
    type Ok = Value;
    type Error = ObjectHashError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), ObjectHashError> {
        let key = key.serialize(KeyClassifier).map_err(|err| match err {
            ObjectHashError::UnsupportedType { .. } => ObjectHashError::UnsupportedType {
                // Maps hand over `&K`.
                type_name: std::any::type_name::<T>()
                    .trim_start_matches('&')
                    .to_string(),
            },
            other => other,
        })?;
        self.pending_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), ObjectHashError> {
        let key = self.pending_key.take().ok_or_else(|| {
            ObjectHashError::Serialize("map value serialized before its key".to_string())
        })?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value, ObjectHashError> {
        Ok(Value::Dict(self.entries))
    }
}

impl ser::SerializeStruct for MapClassifier {
    type Ok = Value;
    type Error = ObjectHashError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ObjectHashError> {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value, ObjectHashError> {
        Ok(Value::Dict(self.entries))
    }
}

/// Collects struct variant fields into `{variant: {..}}`.
#[doc(hidden)]
pub struct StructVariantClassifier {
    variant: &'static str,
    map: MapClassifier,
}

impl ser::SerializeStructVariant for StructVariantClassifier {
    type Ok = Value;
    type Error = ObjectHashError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), ObjectHashError> {
        self.map.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value, ObjectHashError> {
        Ok(single_entry(self.variant, Value::Dict(self.map.entries)))
    }
}

/// Turns a map key into the string a `Dict` is keyed by.
///
/// Rejections carry the serde kind; [`MapClassifier`] replaces it with the key's
/// Rust type name.
struct KeyClassifier;

fn unsupported_key(kind: &str) -> ObjectHashError {
    ObjectHashError::UnsupportedType {
        type_name: format!("{kind} map key"),
    }
}

impl ser::Serializer for KeyClassifier {
    type Ok = String;
    type Error = ObjectHashError;

    type SerializeSeq = Impossible<String, ObjectHashError>;
    type SerializeTuple = Impossible<String, ObjectHashError>;
    type SerializeTupleStruct = Impossible<String, ObjectHashError>;
    type SerializeTupleVariant = Impossible<String, ObjectHashError>;
    type SerializeMap = Impossible<String, ObjectHashError>;
    type SerializeStruct = Impossible<String, ObjectHashError>;
    type SerializeStructVariant = Impossible<String, ObjectHashError>;

    fn serialize_bool(self, _v: bool) -> Result<String, ObjectHashError> {
        Err(unsupported_key("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String, ObjectHashError> {
        Err(unsupported_key("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String, ObjectHashError> {
        Err(unsupported_key("f64"))
    }

    fn serialize_char(self, v: char) -> Result<String, ObjectHashError> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, ObjectHashError> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, ObjectHashError> {
        Err(unsupported_key("bytes"))
    }

    fn serialize_none(self) -> Result<String, ObjectHashError> {
        Err(unsupported_key("none"))
    }

    fn serialize_some<T: ?Sized + Serialize>(self, _value: &T) -> Result<String, ObjectHashError> {
        Err(unsupported_key("option"))
    }

    fn serialize_unit(self) -> Result<String, ObjectHashError> {
        Err(unsupported_key("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String, ObjectHashError> {
        Err(unsupported_key(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, ObjectHashError> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, ObjectHashError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, ObjectHashError> {
        Err(unsupported_key(name))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, ObjectHashError> {
        Err(unsupported_key("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, ObjectHashError> {
        Err(unsupported_key("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, ObjectHashError> {
        Err(unsupported_key(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, ObjectHashError> {
        Err(unsupported_key(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, ObjectHashError> {
        Err(unsupported_key("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, ObjectHashError> {
        Err(unsupported_key(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, ObjectHashError> {
        Err(unsupported_key(name))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use serde::Serialize;
    use serde_json::json;

    use super::*;

    fn classify<T: Serialize>(value: &T) -> Result<Value, ObjectHashError> {
        value.serialize(Classifier::new(crate::api::DEFAULT_MAX_DEPTH))
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Pair(u8, u8),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn enums_follow_externally_tagged_json() {
        assert_eq!(classify(&Shape::Empty).unwrap(), Value::from("Empty"));
        assert_eq!(
            classify(&Shape::Circle(2.5)).unwrap().digest().to_hex(),
            "6f543861f9ce62c563a936c1da7739c59a644bdc9fc33b6d93902b9e63c7edd4"
        );
        assert_eq!(
            classify(&Shape::Pair(1, 2)).unwrap(),
            classify(&json!({"Pair": [1, 2]})).unwrap()
        );
        assert_eq!(
            classify(&Shape::Rect { w: 3, h: 4 }).unwrap(),
            classify(&json!({"Rect": {"h": 4, "w": 3}})).unwrap()
        );
    }

    #[test]
    fn integer_map_keys_are_stringified() {
        let mut map = BTreeMap::new();
        map.insert(7u32, "seven");
        assert_eq!(classify(&map).unwrap(), classify(&json!({"7": "seven"})).unwrap());
    }

    #[test]
    fn non_string_map_keys_are_unsupported() {
        let mut map = HashMap::new();
        map.insert(true, 1);
        let err = classify(&map).unwrap_err();
        assert_eq!(err.to_string(), "Unsupported type: bool");

        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 1);
        assert!(matches!(
            classify(&map),
            Err(ObjectHashError::UnsupportedType { type_name }) if type_name == "(u8, u8)"
        ));
    }

    #[test]
    fn non_finite_floats_report_their_path() {
        let err = classify(&(vec![0.0, f64::INFINITY],)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "normalization failed: non-finite number at [0].[1]"
        );

        let mut map = BTreeMap::new();
        map.insert("x", f32::NAN);
        let err = classify(&map).unwrap_err();
        assert_eq!(err.to_string(), "normalization failed: non-finite number at x");
    }

    #[test]
    fn set_and_bytes_wrappers() {
        let set: Set<&str> = ["b", "a", "b"].into_iter().collect();
        assert_eq!(
            classify(&set).unwrap(),
            Value::Set(vec![Value::from("b"), Value::from("a")])
        );
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["b","a","b"]"#);
        assert_eq!(
            classify(&Bytes(vec![0x00, 0xff])).unwrap(),
            Value::RawBytes(vec![0x00, 0xff])
        );
        assert_eq!(classify(&Set::<u8>::new()).unwrap(), Value::Set(vec![]));
    }

    #[test]
    fn set_marker_around_a_scalar_is_unsupported() {
        struct FakeSet;
        impl Serialize for FakeSet {
            fn serialize<S: ser::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
                s.serialize_newtype_struct(SET_MARKER, &1u8)
            }
        }
        assert!(matches!(
            classify(&FakeSet),
            Err(ObjectHashError::UnsupportedType { type_name }) if type_name == "set of number"
        ));
        assert_eq!(
            classify(&Set(vec![1u8])).unwrap(),
            Value::Set(vec![Value::Number(Number::from_u64(1))])
        );
    }

    #[test]
    fn key_serialize_errors_pass_through() {
        #[derive(PartialEq, Eq, PartialOrd, Ord)]
        struct BadKey;
        impl Serialize for BadKey {
            fn serialize<S: ser::Serializer>(&self, _s: S) -> Result<S::Ok, S::Error> {
                Err(ser::Error::custom("no key"))
            }
        }
        let mut map = BTreeMap::new();
        map.insert(BadKey, 1);
        assert!(matches!(classify(&map), Err(ObjectHashError::Serialize(ref m)) if m == "no key"));
    }

    #[test]
    fn options_and_units() {
        assert_eq!(classify(&None::<u8>).unwrap(), Value::Null);
        assert_eq!(classify(&Some("x")).unwrap(), Value::from("x"));
        assert_eq!(classify(&()).unwrap(), Value::Null);
        assert_eq!(classify(&'c').unwrap(), Value::from("c"));
    }

    #[test]
    fn depth_limit_applies() {
        let nested = vec![vec![vec![1u8]]];
        assert!(nested.serialize(Classifier::new(3)).is_ok());
        assert!(matches!(
            nested.serialize(Classifier::new(2)),
            Err(ObjectHashError::DepthLimitExceeded { limit: 2 })
        ));
    }

    #[test]
    fn custom_serialize_errors_surface() {
        struct Broken;
        impl Serialize for Broken {
            fn serialize<S: ser::Serializer>(&self, _s: S) -> Result<S::Ok, S::Error> {
                Err(ser::Error::custom("lock poisoned"))
            }
        }
        let err = classify(&vec![Broken]).unwrap_err();
        assert!(matches!(err, ObjectHashError::Serialize(ref msg) if msg == "lock poisoned"));
    }
}
