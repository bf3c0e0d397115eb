//! Golden fixture files.
//!
//! A fixture is line oriented. Empty lines and lines starting with `#` are
//! skipped while looking for the next JSON line; the line right after it is the
//! expected lowercase hex digest.
//!
//! ```text
//! # two strings
//! ["foo", "bar"]
//! 32ae896c413cfdc79eec68be9139c86ded8b279238467c216cf2bec4d5f1e4a2
//! ```

use std::path::Path;

use thiserror::Error;

use crate::api::ObjectHasher;

/// Errors while reading a fixture.
#[derive(Debug, Error)]
pub enum GoldenError {
    /// The fixture could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A JSON line had no digest line after it.
    #[error("premature EOF: JSON on line {line} has no expected digest")]
    PrematureEof {
        /// One-based line of the dangling JSON.
        line: usize,
    },
}

/// One input/expected-digest pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenCase {
    /// One-based line of the JSON text.
    pub line: usize,
    /// JSON text to hash.
    pub json: String,
    /// Expected lowercase hex digest.
    pub expected: String,
}

/// A case whose computed digest differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenMismatch {
    /// The failing case.
    pub case: GoldenCase,
    /// Computed hex digest, or the error message when hashing failed.
    pub actual: String,
}

/// Parses fixture text into cases.
pub fn parse_fixture(text: &str) -> Result<Vec<GoldenCase>, GoldenError> {
    let mut cases = Vec::new();
    let mut lines = text.lines().enumerate();
    while let Some((idx, line)) = lines.next() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (_, expected) = lines
            .next()
            .ok_or(GoldenError::PrematureEof { line: idx + 1 })?;
        cases.push(GoldenCase {
            line: idx + 1,
            json: line.to_string(),
            expected: expected.trim_end().to_string(),
        });
    }
    Ok(cases)
}

/// Reads and parses a fixture file.
pub fn read_fixture(path: impl AsRef<Path>) -> Result<Vec<GoldenCase>, GoldenError> {
    let text = std::fs::read_to_string(path)?;
    parse_fixture(&text)
}

/// Hashes every case and returns the ones that do not match.
pub fn check(hasher: &ObjectHasher, cases: &[GoldenCase]) -> Vec<GoldenMismatch> {
    cases
        .iter()
        .filter_map(|case| {
            let actual = match hasher.hash_common_json(&case.json) {
                Ok(digest) => digest.to_hex(),
                Err(err) => err.to_string(),
            };
            (actual != case.expected).then(|| GoldenMismatch {
                case: case.clone(),
                actual,
            })
        })
        .collect()
}
