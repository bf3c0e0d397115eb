use objecthash::golden::GoldenError;
use objecthash::ObjectHashError;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File name, or `stdin`.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Hashing failed.
    #[error(transparent)]
    Hash(#[from] ObjectHashError),
    /// Fixture could not be loaded.
    #[error("invalid fixture: {0}")]
    Golden(#[from] GoldenError),
    /// Some fixture cases did not match.
    #[error("{failed} of {total} golden cases failed")]
    GoldenFailed {
        /// Number of mismatches.
        failed: usize,
        /// Number of cases checked.
        total: usize,
    },
    /// The number cannot be hashed.
    #[error("not a finite number: {0}")]
    NonFinite(f64),
}
