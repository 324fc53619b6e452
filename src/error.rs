//! Public error type for Cairn.
//!
//! Wraps internal errors into a stable surface so callers match on one
//! flat enum regardless of which layer failed.

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
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// The embedding collaborator failed. Worth retrying.
    #[error("embedding failed: {0}")]
    Embedding(String),

    /// Stored data failed to decode; indicates storage-layer corruption.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// The operation observed a cancellation signal or deadline.
    #[error("operation cancelled")]
    Cancelled,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure.
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
        matches!(self, Error::Corrupt(_))
    }
}

// Convert from internal core errors
impl From<cairn_core::Error> for Error {
    fn from(e: cairn_core::Error) -> Self {
        use cairn_core::Error as CoreError;
        match e {
            CoreError::NotFound(what) => Error::NotFound(what),
            CoreError::AlreadyExists(what) => Error::AlreadyExists(what),
            CoreError::InvalidName { name, reason } => {
                Error::InvalidName(format!("{name:?}: {reason}"))
            }
            CoreError::Embedding(err) => Error::Embedding(err.to_string()),
            CoreError::CorruptRecord(what) => Error::Corrupt(what),
            CoreError::Cancelled => Error::Cancelled,
            CoreError::Io(err) => Error::Io(err),
            CoreError::Serialization(what) => Error::Serialization(what),
            CoreError::Config(what) => Error::Config(what),
        }
    }
}
