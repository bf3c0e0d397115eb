//! Structure-sensitive object hashes for common JSON and native values.
//!
//! A value is reduced to the closed [`Value`] model (null, bool, string, number,
//! raw bytes, list, dict, set) and digested recursively with SHA-256. Scalars are
//! hashed from a tagged encoding; containers are hashed from the digests of their
//! children, sorted by digest bytes for dicts and sets. Two inputs that differ only
//! in key order, in set member order, or in writing `1` versus `1.0` hash identically.
//!
//! ## Quick Start
//!
//! ```rust
//! use objecthash::{common_json_hash, object_hash};
//! use serde_json::json;
//!
//! let from_text = common_json_hash(r#"{"k2":"v2","k1":"v1","k3":"v3"}"#)?;
//! let from_native = object_hash(&json!({"k1": "v1", "k2": "v2", "k3": "v3"}))?;
//! assert_eq!(from_text, from_native);
//! assert_eq!(
//!     from_text.to_hex(),
//!     "ddd65f1f7568269a30df7cafc26044537dc2f02a1a0d830da61762fc3e687057"
//! );
//! # Ok::<(), objecthash::ObjectHashError>(())
//! ```
//!
//! Numbers are always hashed as doubles. Integers of magnitude 2^53 and above
//! lose precision exactly as a generic JSON decoder would lose it, so
//! `9007199254740992` and `9007199254740993` share a digest.
#![deny(missing_docs)]

/// Top-level hashing API and options.
pub mod api;
/// JSON decoding into a duplicate-preserving tree.
pub mod decode;
/// Digest type produced by hashing.
pub mod digest;
/// Error types for hashing, parsing and normalization.
pub mod errors;
/// Golden fixture parsing and checking.
pub mod golden;
/// Recursive digest composition over the value model.
pub mod hasher;
/// Classification of `Serialize` types into the value model.
pub mod native;
/// Common-JSON normalization of decoded trees.
pub mod normalize;
/// Finite numbers and their canonical encoding.
pub mod number;
/// Validation errors for primitives and options.
pub mod validation;
/// The canonical value model.
pub mod value;

mod path;

pub use api::{
    common_json_hash, object_hash, parse_common_json, to_common_value, HashOptions, ObjectHasher,
};
pub use decode::Decoded;
pub use digest::{Digest, DigestAlg, DIGEST_LEN};
pub use errors::{NormalizationError, ObjectHashError, ParseError};
pub use native::{Bytes, Set};
pub use number::Number;
pub use validation::ValidationError;
pub use value::Value;
