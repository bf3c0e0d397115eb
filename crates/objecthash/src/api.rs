use serde::Serialize;

use crate::decode::decode;
use crate::digest::Digest;
use crate::errors::ObjectHashError;
use crate::native::Classifier;
use crate::normalize::Normalizer;
use crate::validation::ValidationError;
use crate::value::Value;

/// Deepest nesting the JSON decoder accepts; also the ceiling for `max_depth`.
pub const MAX_DEPTH_LIMIT: usize = 127;

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = MAX_DEPTH_LIMIT;

/// Options for hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashOptions {
    /// Maximum number of nested containers (default: 127). Values above
    /// [`MAX_DEPTH_LIMIT`] act as the limit itself.
    pub max_depth: usize,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl HashOptions {
    /// Constructs validated options. `max_depth` must be in `1..=MAX_DEPTH_LIMIT`.
    pub fn new(max_depth: usize) -> Result<Self, ValidationError> {
        if max_depth == 0 || max_depth > MAX_DEPTH_LIMIT {
            return Err(ValidationError::OutOfBounds {
                field: "max_depth",
                value: max_depth.to_string(),
            });
        }
        Ok(Self { max_depth })
    }
}

/// Computes object hashes from JSON text or native values.
///
/// # Example
///
/// ```rust
/// use objecthash::{HashOptions, ObjectHasher};
///
/// let hasher = ObjectHasher::new(HashOptions::default());
/// let digest = hasher.hash_common_json(r#"["foo", "bar"]"#)?;
/// assert_eq!(
///     digest.to_hex(),
///     "32ae896c413cfdc79eec68be9139c86ded8b279238467c216cf2bec4d5f1e4a2"
/// );
/// assert_eq!(hasher.hash_value(&vec!["foo", "bar"])?, digest);
/// # Ok::<(), objecthash::ObjectHashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectHasher {
    options: HashOptions,
}

impl ObjectHasher {
    /// Creates a hasher with the provided options.
    pub fn new(options: HashOptions) -> Self {
        Self { options }
    }

    /// Creates a hasher with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Result<Self, ObjectHashError> {
        Ok(Self::new(HashOptions::new(max_depth)?))
    }

    /// Options in effect.
    pub fn options(&self) -> &HashOptions {
        &self.options
    }

    fn depth_limit(&self) -> usize {
        self.options.max_depth.min(MAX_DEPTH_LIMIT)
    }

    /// Decodes JSON text and normalizes it into the value model.
    pub fn parse_common_json(&self, text: &str) -> Result<Value, ObjectHashError> {
        let limit = self.depth_limit();
        let decoded = decode(text).map_err(|err| {
            if err.is_recursion_limit() {
                ObjectHashError::DepthLimitExceeded { limit }
            } else {
                ObjectHashError::Parse(err)
            }
        })?;
        Normalizer::new(limit).normalize(decoded)
    }

    /// Hashes JSON text under common-JSON rules.
    ///
    /// # Errors
    ///
    /// [`ObjectHashError::Parse`] for malformed text,
    /// [`ObjectHashError::Normalization`] for repeated keys and
    /// [`ObjectHashError::DepthLimitExceeded`] for overly deep input.
    pub fn hash_common_json(&self, text: &str) -> Result<Digest, ObjectHashError> {
        let result = self.parse_common_json(text).map(|value| value.digest());
        record("common JSON", text.len(), &result);
        result
    }

    /// Classifies a native value into the value model.
    pub fn to_common_value<T: ?Sized + Serialize>(
        &self,
        native: &T,
    ) -> Result<Value, ObjectHashError> {
        native.serialize(Classifier::new(self.depth_limit()))
    }

    /// Hashes a native value.
    ///
    /// # Errors
    ///
    /// [`ObjectHashError::UnsupportedType`] when a part of the value has no
    /// mapping (such as a map keyed by floats), plus the normalization and depth
    /// errors of [`ObjectHasher::hash_common_json`].
    pub fn hash_value<T: ?Sized + Serialize>(&self, native: &T) -> Result<Digest, ObjectHashError> {
        let result = self.to_common_value(native).map(|value| value.digest());
        record(std::any::type_name::<T>(), 0, &result);
        result
    }

    /// Returns `true` when `text` hashes to `claimed`.
    pub fn verify_common_json(&self, text: &str, claimed: &Digest) -> Result<bool, ObjectHashError> {
        Ok(&self.hash_common_json(text)? == claimed)
    }
}

#[cfg(feature = "tracing")]
fn record(input: &str, bytes: usize, result: &Result<Digest, ObjectHashError>) {
    match result {
        Ok(digest) => tracing::trace!(%input, bytes, %digest, "hashed"),
        Err(err) => tracing::debug!(%input, bytes, error = %err, "rejected"),
    }
}

#[cfg(not(feature = "tracing"))]
fn record(_input: &str, _bytes: usize, _result: &Result<Digest, ObjectHashError>) {}

/// Hashes JSON text with default options.
pub fn common_json_hash(text: &str) -> Result<Digest, ObjectHashError> {
    ObjectHasher::default().hash_common_json(text)
}

/// Hashes a native value with default options.
pub fn object_hash<T: ?Sized + Serialize>(native: &T) -> Result<Digest, ObjectHashError> {
    ObjectHasher::default().hash_value(native)
}

/// Classifies a native value with default options.
pub fn to_common_value<T: ?Sized + Serialize>(native: &T) -> Result<Value, ObjectHashError> {
    ObjectHasher::default().to_common_value(native)
}

/// Decodes and normalizes JSON text with default options.
pub fn parse_common_json(text: &str) -> Result<Value, ObjectHashError> {
    ObjectHasher::default().parse_common_json(text)
}
