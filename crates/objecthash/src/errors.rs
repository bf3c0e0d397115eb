use std::fmt;

use serde::ser;
use serde_json::error::Category;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the hashing API.
#[derive(Debug, Error)]
pub enum ObjectHashError {
    /// The JSON text was rejected by the decoder.
    #[error("JSON parse error: {0}")]
    Parse(#[from] ParseError),
    /// The decoded or classified value violates a canonicalization rule.
    #[error("normalization failed: {0}")]
    Normalization(#[from] NormalizationError),
    /// A native value has no mapping into the value model.
    #[error("Unsupported type: {type_name}")]
    UnsupportedType {
        /// Name of the offending type or serde data-model kind.
        type_name: String,
    },
    /// The input nests containers deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit}")]
    DepthLimitExceeded {
        /// Configured maximum depth.
        limit: usize,
    },
    /// A native value's own `Serialize` implementation failed.
    #[error("serialization failed: {0}")]
    Serialize(String),
    /// Hashing options were rejected.
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] ValidationError),
}

impl ser::Error for ObjectHashError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        ObjectHashError::Serialize(msg.to_string())
    }
}

/// Violations of the common-JSON canonicalization rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    /// An object or map repeated a key.
    #[error("duplicate key {key:?} at {path}")]
    DuplicateKey {
        /// The repeated key.
        key: String,
        /// Location of the object holding the key.
        path: String,
    },
    /// NaN or an infinity was supplied where a number was expected.
    #[error("non-finite number at {path}")]
    NonFiniteNumber {
        /// Location of the number.
        path: String,
    },
}

/// Syntax error reported by the JSON decoder.
///
/// `message` is the decoder's own text, unmodified. `found` is the character at
/// the reported position, when the position falls on one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Decoder message, verbatim.
    pub message: String,
    /// One-based line of the failure.
    pub line: usize,
    /// One-based byte column of the failure.
    pub column: usize,
    /// Character found at the failure position.
    pub found: Option<char>,
}

impl ParseError {
    pub(crate) fn from_decoder(err: &serde_json::Error, text: &str) -> Self {
        let (line, column) = (err.line(), err.column());
        // Only an unexpected token sits on a character; EOF and recursion-limit
        // positions do not name an offending one.
        let message = err.to_string();
        let found = if err.classify() != Category::Syntax
            || !names_a_token(&message)
            || line == 0
            || column == 0
        {
            None
        } else {
            text.lines()
                .nth(line - 1)
                .and_then(|l| l.get(column - 1..))
                .and_then(|rest| rest.chars().next())
        };
        Self {
            message,
            line,
            column,
            found,
        }
    }

    /// Whether the decoder stopped at its own nesting limit on otherwise valid text.
    pub fn is_recursion_limit(&self) -> bool {
        self.message.starts_with(RECURSION_LIMIT)
    }
}

const RECURSION_LIMIT: &str = "recursion limit exceeded";

fn names_a_token(message: &str) -> bool {
    ["expected", "trailing characters", "invalid", "key must be"]
        .iter()
        .any(|prefix| message.starts_with(prefix))
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.found {
            Some(c) => write!(f, "{} (unexpected character '{}')", self.message, c),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ParseError {}
