// Error types for loading OCR documents and reading configuration
//
// Using thiserror so callers can match on the failure and the CLI can
// print the full source chain through anyhow.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and decoding an OCR result document
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read OCR document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Outer document is not JSON or lacks `Data.Result`
    #[error("Invalid OCR envelope (expected {{\"Data\": {{\"Result\": \"...\"}}}}): {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    /// `Data.Result` string does not decode to a frames document
    #[error("Invalid OCR result payload in Data.Result: {0}")]
    InvalidResult(#[source] serde_json::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OCR result path must not be empty")]
    EmptyInputPath,

    #[error("Minimum text length must be >= 1, got {0}")]
    InvalidMinTextChars(usize),

    #[error("Bucket size must be > 0 px, got {0}")]
    InvalidBucketSize(i64),

    #[error("Region tolerance must be >= 0 px, got {0}")]
    InvalidTolerance(i64),

    #[error("Invalid report config: {0}")]
    InvalidReportConfig(String),
}

pub type LoadResult<T> = Result<T, LoadError>;
