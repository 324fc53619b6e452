//! Convenient imports for Cairn.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```ignore
//! use cairndb::prelude::*;
//!
//! let db = Cairn::ephemeral(embedder);
//! db.docs.add("docs", DocumentSpec::new("a", "The cat sat"))?;
//! ```

// Main entry point
pub use crate::database::{Cairn, CairnBuilder};

// Error handling
pub use crate::error::{Error, Result};

// Facade primitives
pub use crate::primitives::{Collections, Docs, Search};

// Core types
pub use cairn_core::{
    CancelHandle, Cancellation, Document, DocumentSpec, Embedder, Metadata, QueryMatch, Scalar,
    StaticEmbedder,
};

// Query and ingestion tuning
pub use cairn_primitives::{BatchOptions, MetadataFilter};

// Re-export serde_json for convenience
pub use serde_json::json;
