//! Object hash composition.
//!
//! Every digest is `sha256(tag || payload)`. Scalars hash their own encoding;
//! containers hash the digests of their children:
//!
//! - list: child digests in order
//! - dict: `digest(key) || digest(value)` per entry, sorted by bytes
//! - set: member digests, sorted by bytes, exact duplicates dropped
//!
//! Sorting on digest bytes gives unordered containers a deterministic layout
//! without needing any order over the members themselves.

use sha2::{Digest as Sha2Digest, Sha256};

use crate::digest::{Digest, DIGEST_LEN};
use crate::value::{tag, Value};

/// Hashes `payload` behind a one-byte type tag.
pub fn tagged(tag: u8, payload: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update([tag]);
    hasher.update(payload);
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&hasher.finalize());
    Digest::from_bytes(bytes)
}

/// Object hash of a string.
pub fn digest_str(text: &str) -> Digest {
    tagged(tag::UNICODE, text.as_bytes())
}

/// Object hash of any value. Total over the value model.
///
/// Recurses once per nesting level. Trees produced by
/// [`ObjectHasher`](crate::ObjectHasher) stay within
/// [`MAX_DEPTH_LIMIT`](crate::api::MAX_DEPTH_LIMIT); a `Value` assembled by hand
/// must respect the same bound.
pub fn digest(value: &Value) -> Digest {
    match value {
        Value::Null => tagged(tag::NULL, b""),
        Value::Bool(b) => tagged(tag::BOOL, if *b { b"1" } else { b"0" }),
        Value::UnicodeString(text) => digest_str(text),
        Value::Number(number) => tagged(tag::NUMBER, number.canonical().as_bytes()),
        Value::RawBytes(bytes) => tagged(tag::RAW_BYTES, bytes),
        Value::List(items) => {
            let mut payload = Vec::with_capacity(items.len() * DIGEST_LEN);
            for item in items {
                payload.extend_from_slice(digest(item).as_bytes());
            }
            tagged(tag::LIST, &payload)
        }
        Value::Dict(entries) => {
            let mut pairs: Vec<[u8; 2 * DIGEST_LEN]> = entries
                .iter()
                .map(|(key, value)| {
                    let mut pair = [0u8; 2 * DIGEST_LEN];
                    pair[..DIGEST_LEN].copy_from_slice(digest_str(key).as_bytes());
                    pair[DIGEST_LEN..].copy_from_slice(digest(value).as_bytes());
                    pair
                })
                .collect();
            pairs.sort_unstable();
            let payload: Vec<u8> = pairs.iter().flatten().copied().collect();
            tagged(tag::DICT, &payload)
        }
        Value::Set(members) => {
            let mut digests: Vec<Digest> = members.iter().map(digest).collect();
            digests.sort_unstable();
            digests.dedup();
            let payload: Vec<u8> = digests
                .iter()
                .flat_map(|d| d.as_bytes().iter().copied())
                .collect();
            tagged(tag::SET, &payload)
        }
    }
}
