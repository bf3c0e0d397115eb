use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::decode::Decoded;
use crate::errors::{NormalizationError, ObjectHashError};
use crate::number::Number;
use crate::path::Path;
use crate::value::Value;

/// Converts decoded JSON into the value model.
///
/// Every number becomes [`Value::Number`], arrays keep their order, and an object
/// that repeats a key is rejected rather than resolved.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    max_depth: usize,
}

impl Normalizer {
    /// Creates a normalizer that rejects nesting deeper than `max_depth` containers.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Normalizes a decoded tree.
    pub fn normalize(&self, decoded: Decoded) -> Result<Value, ObjectHashError> {
        self.normalize_at(decoded, Path::root(), 0)
    }

    fn normalize_at(
        &self,
        decoded: Decoded,
        path: Path,
        depth: usize,
    ) -> Result<Value, ObjectHashError> {
        match decoded {
            Decoded::Null => Ok(Value::Null),
            Decoded::Bool(b) => Ok(Value::Bool(b)),
            Decoded::String(s) => Ok(Value::UnicodeString(s)),
            Decoded::Number(n) => Number::new(n).map(Value::Number).ok_or_else(|| {
                NormalizationError::NonFiniteNumber {
                    path: path.to_string(),
                }
                .into()
            }),
            Decoded::Array(items) => {
                let depth = self.enter(depth)?;
                let mut list = Vec::with_capacity(items.len());
                for (idx, item) in items.into_iter().enumerate() {
                    list.push(self.normalize_at(item, path.push_index(idx), depth)?);
                }
                Ok(Value::List(list))
            }
            Decoded::Object(members) => {
                let depth = self.enter(depth)?;
                let mut map = BTreeMap::new();
                for (key, member) in members {
                    let child_path = path.push_field(&key);
                    match map.entry(key) {
                        Entry::Vacant(slot) => {
                            slot.insert(self.normalize_at(member, child_path, depth)?);
                        }
                        Entry::Occupied(slot) => {
                            return Err(NormalizationError::DuplicateKey {
                                key: slot.key().clone(),
                                path: path.to_string(),
                            }
                            .into());
                        }
                    }
                }
                Ok(Value::Dict(map))
            }
        }
    }

    fn enter(&self, depth: usize) -> Result<usize, ObjectHashError> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(ObjectHashError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        Ok(depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    fn normalize(text: &str) -> Result<Value, ObjectHashError> {
        Normalizer::new(crate::api::DEFAULT_MAX_DEPTH).normalize(decode(text).unwrap())
    }

    #[test]
    fn numbers_unify() {
        assert_eq!(normalize("[1, 2]").unwrap(), normalize("[1.0, 2e0]").unwrap());
    }

    #[test]
    fn duplicate_key_is_rejected_with_location() {
        let err = normalize(r#"{"outer": [{"k": 1, "k": 2}]}"#).unwrap_err();
        match err {
            ObjectHashError::Normalization(NormalizationError::DuplicateKey { key, path }) => {
                assert_eq!(key, "k");
                assert_eq!(path, "outer.[0]");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_key_at_top_level() {
        let err = normalize(r#"{"a": 1, "a": 1}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "normalization failed: duplicate key \"a\" at root"
        );
    }

    #[test]
    fn depth_limit_counts_containers() {
        let normalizer = Normalizer::new(2);
        assert!(normalizer.normalize(decode("[[1]]").unwrap()).is_ok());
        assert!(normalizer.normalize(decode("{\"a\": [1]}").unwrap()).is_ok());
        let err = normalizer.normalize(decode("[[[1]]]").unwrap()).unwrap_err();
        assert!(matches!(err, ObjectHashError::DepthLimitExceeded { limit: 2 }));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let err = Normalizer::new(4)
            .normalize(Decoded::Array(vec![Decoded::Number(f64::NAN)]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "normalization failed: non-finite number at [0]"
        );
    }
}
