//! The embedding collaborator.
//!
//! The store consumes, and never implements, embedding generation: any
//! function that fallibly maps text to a fixed-length f64 vector. Rate
//! limits, retries and latency are the implementation's concern; the
//! store tolerates arbitrary delay and propagates every failure.

use std::collections::HashMap;
use thiserror::Error;

/// External text-embedding function.
///
/// Implementations may block for arbitrarily long. Callers that need to
/// bound that use a [`Cancellation`](crate::Cancellation), which the
/// store checks around every `embed` call.
pub trait Embedder: Send + Sync {
    /// Map `text` to its embedding vector.
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbedError>;
}

/// Failure from the embedding collaborator.
///
/// These are retryable from the store's point of view and are never
/// masked; the caller decides whether to retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmbedError {
    /// The service could not be reached.
    #[error("embedding transport error: {0}")]
    Transport(String),

    /// The service answered with an error.
    #[error("embedding service error: {0}")]
    Service(String),

    /// The service answered without any embedding payload.
    #[error("no embeddings found in the response")]
    Empty,
}

/// Deterministic embedder backed by a fixed text-to-vector table.
///
/// Useful for offline pipelines working from precomputed embeddings, and
/// as the stub embedder in tests. Unknown text is a service error.
#[derive(Debug, Clone, Default)]
pub struct StaticEmbedder {
    table: HashMap<String, Vec<f64>>,
}

impl StaticEmbedder {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the embedding returned for `text`.
    pub fn insert(&mut self, text: impl Into<String>, embedding: Vec<f64>) {
        self.table.insert(text.into(), embedding);
    }

    /// Builder form of [`StaticEmbedder::insert`].
    pub fn with(mut self, text: impl Into<String>, embedding: Vec<f64>) -> Self {
        self.insert(text, embedding);
        self
    }

    /// Number of registered texts.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when no texts are registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Embedder for StaticEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f64>, EmbedError> {
        self.table
            .get(text)
            .cloned()
            .ok_or_else(|| EmbedError::Service(format!("no embedding registered for {text:?}")))
    }
}
