//! Nearest-neighbor query facade.

use crate::error::Result;
use cairn_core::{Cancellation, Embedder, QueryMatch};
use cairn_primitives::{MetadataFilter, QueryEngine};
use std::sync::Arc;

/// Query operations.
///
/// Access via `db.search`. Queries embed the query text, scan the whole
/// collection, and keep the single most cosine-similar document that
/// passes the filter.
pub struct Search {
    engine: QueryEngine,
}

impl Search {
    pub(crate) fn new(db: Arc<cairn_engine::Database>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            engine: QueryEngine::new(db, embedder),
        }
    }

    /// Single best match for `query_text`, or `None` when the collection
    /// is empty or nothing passes the filter.
    pub fn nearest(
        &self,
        collection: &str,
        query_text: &str,
        filter: &MetadataFilter,
    ) -> Result<Option<QueryMatch>> {
        Ok(self.engine.query(collection, query_text, filter)?)
    }

    /// [`Search::nearest`] with a cancellation signal, checked per
    /// scanned document.
    pub fn nearest_with(
        &self,
        collection: &str,
        query_text: &str,
        filter: &MetadataFilter,
        cancel: &Cancellation,
    ) -> Result<Option<QueryMatch>> {
        Ok(self.engine.query_with(collection, query_text, filter, cancel)?)
    }
}
