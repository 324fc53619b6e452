//! Document ingestion and lookup facade.

use crate::error::Result;
use cairn_core::{Cancellation, Document, DocumentSpec, Embedder};
use cairn_primitives::{BatchOptions, DocumentStore, Ingestor};
use std::sync::Arc;

/// Document operations.
///
/// Access via `db.docs`. Insertion embeds the document text through the
/// configured [`Embedder`] and persists the full record durably, or
/// nothing at all.
pub struct Docs {
    ingest: Ingestor,
    store: DocumentStore,
}

impl Docs {
    pub(crate) fn new(db: Arc<cairn_engine::Database>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            ingest: Ingestor::new(db.clone(), embedder),
            store: DocumentStore::new(db),
        }
    }

    /// Embed and persist one document.
    ///
    /// Fails with `AlreadyExists` for a duplicate id and `Embedding` when
    /// the collaborator fails; on embedding failure nothing is written.
    pub fn add(&self, collection: &str, spec: DocumentSpec) -> Result<()> {
        Ok(self.ingest.add_document(collection, spec)?)
    }

    /// [`Docs::add`] with a cancellation signal.
    pub fn add_with(
        &self,
        collection: &str,
        spec: DocumentSpec,
        cancel: &Cancellation,
    ) -> Result<()> {
        Ok(self.ingest.add_document_with(collection, spec, cancel)?)
    }

    /// Insert a batch concurrently.
    ///
    /// Documents that succeed stay persisted even when the batch reports
    /// an error; the first-seen failure is returned.
    pub fn add_batch(&self, collection: &str, specs: Vec<DocumentSpec>) -> Result<()> {
        Ok(self.ingest.add_documents(collection, specs)?)
    }

    /// [`Docs::add_batch`] with worker-pool tuning and cancellation.
    pub fn add_batch_with(
        &self,
        collection: &str,
        specs: Vec<DocumentSpec>,
        opts: &BatchOptions,
    ) -> Result<()> {
        Ok(self.ingest.add_documents_with(collection, specs, opts)?)
    }

    /// Fetch a document by id.
    pub fn get(&self, collection: &str, id: &str) -> Result<Document> {
        Ok(self.store.get(collection, id)?)
    }

    /// All documents in the collection, in id order.
    pub fn all(&self, collection: &str) -> Result<Vec<Document>> {
        let mut docs = Vec::new();
        for item in self.store.scan_all(collection)? {
            docs.push(item?);
        }
        Ok(docs)
    }
}
