//! Ingestion: single inserts and concurrent batch loading.
//!
//! The batch path fans specs out to a bounded worker pool over channels
//! and fans errors back in. Documents that succeed stay persisted even
//! when the batch as a whole reports a failure; the first error seen is
//! returned and the rest are logged.

use crate::documents::DocumentStore;
use cairn_core::{Cancellation, Document, DocumentSpec, Embedder, Error, Result};
use cairn_engine::Database;
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Tuning for [`Ingestor::add_documents_with`].
#[derive(Clone, Default)]
pub struct BatchOptions {
    /// Cap on concurrent workers. Defaults to the smaller of the batch
    /// size and the machine's available parallelism.
    pub max_workers: Option<usize>,
    /// Checked before each embedding call and store write.
    pub cancel: Cancellation,
}

/// Drives document insertion through the embedding collaborator and the
/// document store.
#[derive(Clone)]
pub struct Ingestor {
    store: DocumentStore,
    embedder: Arc<dyn Embedder>,
}

impl Ingestor {
    /// Create an ingestor over a shared database handle.
    pub fn new(db: Arc<Database>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            store: DocumentStore::new(db),
            embedder,
        }
    }

    /// Insert one document: uniqueness check, embed, persist.
    ///
    /// Embedding failure propagates with no write; either the full record
    /// is persisted or nothing is.
    pub fn add_document(&self, collection: &str, spec: DocumentSpec) -> Result<()> {
        self.add_document_with(collection, spec, &Cancellation::never())
    }

    /// [`Ingestor::add_document`] with a cancellation signal.
    pub fn add_document_with(
        &self,
        collection: &str,
        spec: DocumentSpec,
        cancel: &Cancellation,
    ) -> Result<()> {
        cancel.checkpoint()?;
        if self.store.contains(collection, &spec.id)? {
            return Err(Error::AlreadyExists(format!(
                "document {:?} in collection {collection:?}",
                spec.id
            )));
        }
        cancel.checkpoint()?;
        let embedding = self.embedder.embed(&spec.text)?;
        cancel.checkpoint()?;
        let doc = Document {
            id: spec.id,
            text: spec.text,
            embedding,
            metadata: spec.metadata,
        };
        self.store.put(collection, &doc)
    }

    /// Insert a batch concurrently.
    ///
    /// One pool task per document, capped by [`BatchOptions::max_workers`].
    /// There is no atomicity across the batch and no rollback: on failure
    /// the first-seen error is returned while individually successful
    /// documents remain persisted. No ordering holds among concurrent
    /// insertions.
    pub fn add_documents(&self, collection: &str, specs: Vec<DocumentSpec>) -> Result<()> {
        self.add_documents_with(collection, specs, &BatchOptions::default())
    }

    /// [`Ingestor::add_documents`] with worker-pool tuning and
    /// cancellation.
    pub fn add_documents_with(
        &self,
        collection: &str,
        specs: Vec<DocumentSpec>,
        opts: &BatchOptions,
    ) -> Result<()> {
        if specs.is_empty() {
            return Ok(());
        }

        let workers = opts
            .max_workers
            .unwrap_or_else(default_parallelism)
            .clamp(1, specs.len());
        let total = specs.len();

        let (work_tx, work_rx) = crossbeam_channel::unbounded::<DocumentSpec>();
        let (err_tx, err_rx) = crossbeam_channel::unbounded::<Error>();
        for spec in specs {
            let _ = work_tx.send(spec);
        }
        drop(work_tx);

        thread::scope(|scope| {
            for _ in 0..workers {
                let work_rx = work_rx.clone();
                let err_tx = err_tx.clone();
                scope.spawn(move || {
                    while let Ok(spec) = work_rx.recv() {
                        let id = spec.id.clone();
                        if let Err(err) = self.add_document_with(collection, spec, &opts.cancel) {
                            warn!(collection, id = %id, %err, "batch document failed");
                            let _ = err_tx.send(err);
                        }
                    }
                });
            }
        });
        drop(err_tx);

        let mut errors: Vec<Error> = err_rx.into_iter().collect();
        if errors.is_empty() {
            debug!(collection, total, workers, "batch ingested");
            Ok(())
        } else {
            Err(errors.remove(0))
        }
    }
}

fn default_parallelism() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(4)
}
