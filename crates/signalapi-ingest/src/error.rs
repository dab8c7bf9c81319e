//! Error types for CSV ingestion.

use std::path::PathBuf;

use signalapi_state::StateError;
use thiserror::Error;

/// Result type alias for ingestion.
pub type IngestResult<T> = Result<T, IngestError>;

/// Fatal ingestion failures. Any of these must stop startup.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("seed file checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("seed file is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("line {line}: invalid {column} value {value:?}: {reason}")]
    InvalidNumber {
        line: usize,
        column: &'static str,
        value: String,
        reason: String,
    },

    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    #[error("failed to read seed file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Store(#[from] StateError),
}
