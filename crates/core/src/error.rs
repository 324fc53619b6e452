//! Canonical error types for Cairn.
//!
//! Every error surfaces to the immediate caller; nothing is swallowed
//! internally. Batch ingestion reports one representative error for the
//! whole batch while leaving individually successful writes intact.

use crate::embed::EmbedError;
use thiserror::Error;

/// All Cairn errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Collection or document absent. Expected in normal flow.
    #[error("not found: {0}")]
    NotFound(String),

    /// Duplicate document id, or creation of a collection that already
    /// holds documents.
    #[error("already exists: {0}")]
    AlreadyExists(String),

    /// Collection name incompatible with the key-prefix scheme.
    #[error("invalid collection name {name:?}: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Which rule it broke.
        reason: &'static str,
    },

    /// The external embedding service failed. Retrying is the caller's
    /// decision; the store never masks these.
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbedError),

    /// Stored bytes failed to decode. Fatal for the record and aborts the
    /// enclosing scan.
    #[error("corrupt record: {0}")]
    CorruptRecord(String),

    /// The operation observed a cancellation signal or deadline.
    #[error("operation cancelled")]
    Cancelled,

    /// I/O error from the storage layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure on write.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Result type for Cairn operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an already-exists error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::AlreadyExists(_))
    }

    /// Check if this error is worth retrying.
    ///
    /// Embedding-service failures may succeed on retry; everything else
    /// reflects caller input or stored state and will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Embedding(_))
    }

    /// Check if this error indicates storage-layer corruption.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::CorruptRecord(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_helpers() {
        assert!(Error::NotFound("x".into()).is_not_found());
        assert!(Error::AlreadyExists("x".into()).is_already_exists());
        assert!(Error::Embedding(EmbedError::Empty).is_retryable());
        assert!(!Error::Cancelled.is_retryable());
        assert!(Error::CorruptRecord("bad".into()).is_corruption());
    }

    #[test]
    fn embed_error_converts() {
        let err: Error = EmbedError::Transport("connection refused".into()).into();
        assert!(matches!(err, Error::Embedding(_)));
    }
}
