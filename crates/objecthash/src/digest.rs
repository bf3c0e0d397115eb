use std::fmt;

use base64::Engine;
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::validation::ValidationError;

/// Length in bytes of every digest.
pub const DIGEST_LEN: usize = 32;

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256, the only algorithm object hashes use.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// A 32-byte SHA-256 object hash.
///
/// Displays and serializes as 64 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Wraps raw digest bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses 64 lowercase hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self, ValidationError> {
        let re = Regex::new(r"^[0-9a-f]{64}$").expect("invalid regex");
        let mismatch = || ValidationError::PatternMismatch {
            field: "digest",
            value: hex_str.to_string(),
        };
        if !re.is_match(hex_str) {
            return Err(mismatch());
        }
        let mut bytes = [0u8; DIGEST_LEN];
        hex::decode_to_slice(hex_str, &mut bytes).map_err(|_| mismatch())?;
        Ok(Self(bytes))
    }

    /// Digest algorithm that produced these bytes.
    pub fn alg(&self) -> DigestAlg {
        DigestAlg::Sha256
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Base64URL rendering without padding (43 characters).
    pub fn to_base64url(&self) -> String {
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(self.0)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Digest::from_hex(&s).map_err(de::Error::custom)
    }
}
