//! Generic JSON decoding.
//!
//! [`Decoded`] is what a plain JSON decoder sees: numbers carry no integer/float
//! distinction and objects keep every member in source order, repeated keys
//! included. Rejecting repeats is left to normalization.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};

use crate::errors::ParseError;

/// A decoded JSON value before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any number, integral or not, as the nearest double.
    Number(f64),
    /// A string.
    String(String),
    /// An array.
    Array(Vec<Decoded>),
    /// An object's members in source order.
    Object(Vec<(String, Decoded)>),
}

/// Decodes JSON text, surfacing the decoder's syntax errors as [`ParseError`].
pub fn decode(text: &str) -> Result<Decoded, ParseError> {
    serde_json::from_str(text).map_err(|err| ParseError::from_decoder(&err, text))
}

impl<'de> Deserialize<'de> for Decoded {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecodedVisitor)
    }
}

struct DecodedVisitor;

impl<'de> Visitor<'de> for DecodedVisitor {
    type Value = Decoded;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Decoded, E> {
        Ok(Decoded::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decoded, E> {
        Ok(Decoded::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decoded, E> {
        Ok(Decoded::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decoded, E> {
        Ok(Decoded::Number(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Decoded, E> {
        Ok(Decoded::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Decoded, E> {
        Ok(Decoded::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Decoded, E> {
        Ok(Decoded::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Decoded, E> {
        Ok(Decoded::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Decoded, D::Error> {
        Decoded::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Decoded, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Decoded::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Decoded, A::Error> {
        let mut members = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Decoded>()? {
            members.push((key, value));
        }
        Ok(Decoded::Object(members))
    }
}
