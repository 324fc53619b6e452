//! Document types.
//!
//! A [`Document`] is the stored unit; a [`DocumentSpec`] is what callers
//! hand to ingestion before an embedding exists; a [`QueryMatch`] is what
//! a query hands back.

use crate::value::{Metadata, Scalar};
use serde::{Deserialize, Serialize};

/// A stored document: id, indexed text, embedding vector and metadata.
///
/// Documents are immutable once ingested. Within one collection the id is
/// unique and the embedding arity is constant across every document that
/// ever takes part in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier within its collection.
    pub id: String,
    /// The indexed content.
    pub text: String,
    /// Fixed-arity embedding produced by the external collaborator.
    pub embedding: Vec<f64>,
    /// Scalar metadata used for filtering.
    pub metadata: Metadata,
}

/// Ingestion input: a document before its embedding exists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentSpec {
    /// Unique identifier within the target collection.
    pub id: String,
    /// Text handed to the embedding collaborator.
    pub text: String,
    /// Scalar metadata stored alongside the document.
    pub metadata: Metadata,
}

impl DocumentSpec {
    /// A spec with empty metadata.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: Metadata::new(),
        }
    }

    /// Attach one metadata entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// The single best match returned by a query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryMatch {
    /// The winning document.
    pub document: Document,
    /// Cosine similarity between the query embedding and the document's.
    pub score: f64,
}
