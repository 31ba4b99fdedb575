use std::io;

use crate::kind::SnapshotKind;

/// Errors from snapshot encoding and decoding.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be created, written, opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The view could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The bytes do not decode to a snapshot of the expected shape.
    #[error("malformed snapshot: {0}")]
    Format(String),

    /// The file holds a snapshot of a different kind.
    #[error("snapshot kind mismatch: expected {expected}, found {actual}")]
    KindMismatch {
        expected: SnapshotKind,
        actual: SnapshotKind,
    },
}

/// Result alias for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
