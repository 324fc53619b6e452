//! Exhaustive nearest-neighbor query.

use crate::documents::DocumentStore;
use crate::filter::MetadataFilter;
use crate::similarity::cosine_similarity;
use cairn_core::{Cancellation, Document, Embedder, QueryMatch, Result};
use cairn_engine::Database;
use std::sync::Arc;
use tracing::debug;

/// Scans a whole collection and returns the single best match.
///
/// There is no index; search cost is linear in the collection size and
/// the scan order is id-lexicographic, so relevance comes only from the
/// similarity scores.
#[derive(Clone)]
pub struct QueryEngine {
    store: DocumentStore,
    embedder: Arc<dyn Embedder>,
}

impl QueryEngine {
    /// Create a query engine over a shared database handle.
    pub fn new(db: Arc<Database>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            store: DocumentStore::new(db),
            embedder,
        }
    }

    /// Most similar document to `query_text` under `filter`.
    ///
    /// Returns `Ok(None)` when the collection is empty or nothing passes
    /// the filter; that is a normal outcome, not an error. Candidates
    /// whose embedding length differs from the query's are skipped, not
    /// failed. A corrupt record aborts the whole query.
    pub fn query(
        &self,
        collection: &str,
        query_text: &str,
        filter: &MetadataFilter,
    ) -> Result<Option<QueryMatch>> {
        self.query_with(collection, query_text, filter, &Cancellation::never())
    }

    /// [`QueryEngine::query`] with a cancellation signal, checked per
    /// scanned document.
    pub fn query_with(
        &self,
        collection: &str,
        query_text: &str,
        filter: &MetadataFilter,
        cancel: &Cancellation,
    ) -> Result<Option<QueryMatch>> {
        cancel.checkpoint()?;
        let query_vec = self.embedder.embed(query_text)?;

        let mut best: Option<Document> = None;
        // Strict `>` keeps the first-seen maximum on ties, and NaN
        // similarities (zero vectors) never displace a real score.
        let mut best_score = -1.0_f64;
        let mut scanned = 0usize;

        for item in self.store.scan_all(collection)? {
            cancel.checkpoint()?;
            let doc = item?;
            scanned += 1;
            if !filter.matches(&doc.metadata) {
                continue;
            }
            if query_vec.is_empty() || doc.embedding.len() != query_vec.len() {
                continue;
            }
            let score = cosine_similarity(&query_vec, &doc.embedding);
            if score > best_score {
                best_score = score;
                best = Some(doc);
            }
        }

        debug!(collection, scanned, hit = best.is_some(), "query scan complete");
        Ok(best.map(|document| QueryMatch {
            document,
            score: best_score,
        }))
    }
}
