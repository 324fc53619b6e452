//! # Cairn
//!
//! Embedded vector store with metadata-filtered similarity search.
//!
//! Cairn holds documents (text + metadata + a numeric embedding),
//! persists them under collection namespaces, and answers "most similar
//! document" queries by exhaustive cosine-similarity scan with optional
//! equality metadata filtering.
//!
//! ## Quick Start
//!
//! ```ignore
//! use cairndb::prelude::*;
//! use std::sync::Arc;
//!
//! // Any Embedder works; StaticEmbedder serves precomputed vectors.
//! let embedder = Arc::new(
//!     StaticEmbedder::new()
//!         .with("The cat sat", vec![1.0, 0.0])
//!         .with("A dog ran", vec![0.0, 1.0]),
//! );
//!
//! let db = Cairn::open("./my-db", embedder)?;
//!
//! db.collections.create("docs")?;
//! db.docs.add("docs", DocumentSpec::new("a", "The cat sat").with("source", "x"))?;
//! db.docs.add("docs", DocumentSpec::new("b", "A dog ran").with("source", "y"))?;
//!
//! let hit = db.search.nearest("docs", "The cat sat", &MetadataFilter::new())?;
//! assert_eq!(hit.unwrap().document.id, "a");
//! ```
//!
//! ## Collaborators
//!
//! Two concerns live outside the core and plug in at the seams:
//!
//! - **Embedding**: anything implementing [`Embedder`]. The optional
//!   `openai` feature ships an HTTP client, and [`StaticEmbedder`] serves
//!   fixed tables.
//! - **Storage**: the engine crate's ordered key-value store with
//!   write-ahead durability; [`Cairn::ephemeral`] swaps in the no-disk
//!   variant.

#![warn(missing_docs)]

mod database;
mod error;
mod primitives;

pub mod prelude;

// Main entry points
pub use database::{Cairn, CairnBuilder};
pub use error::{Error, Result};

// Facade primitives
pub use primitives::{Collections, Docs, Search};

// Core vocabulary
pub use cairn_core::{
    CancelHandle, Cancellation, Document, DocumentSpec, EmbedError, Embedder, Metadata,
    QueryMatch, Scalar, StaticEmbedder,
};
pub use cairn_engine::DurabilityMode;
pub use cairn_primitives::{cosine_similarity, BatchOptions, MetadataFilter};

#[cfg(feature = "openai")]
pub use cairn_embed_openai::OpenAiEmbedder;

/// Build [`Metadata`] from a JSON object.
///
/// Values must be scalars (string, number, bool); arrays, objects and
/// null are rejected because equality over structured values is
/// undefined in the filter model.
pub fn metadata_from_json(value: &serde_json::Value) -> Result<Metadata> {
    let Some(map) = value.as_object() else {
        return Err(Error::Serialization("metadata must be a JSON object".into()));
    };
    let mut metadata = Metadata::new();
    for (key, val) in map {
        let scalar = Scalar::from_json(val).ok_or_else(|| {
            Error::Serialization(format!("metadata key {key:?} holds a non-scalar value"))
        })?;
        metadata.insert(key.clone(), scalar);
    }
    Ok(metadata)
}
