//! Document persistence: point lookup, unique insert, full scan.

use crate::collections::validate_collection_name;
use crate::keys;
use crate::record;
use cairn_core::{Document, Error, Result};
use cairn_engine::Database;
use std::sync::Arc;
use tracing::debug;

/// Owns the durable mapping from `(collection, id)` to document records.
#[derive(Clone)]
pub struct DocumentStore {
    db: Arc<Database>,
}

impl DocumentStore {
    /// Create a store over a shared database handle.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// The shared database handle.
    pub fn database(&self) -> &Arc<Database> {
        &self.db
    }

    /// Point lookup. `NotFound` when absent.
    pub fn get(&self, collection: &str, id: &str) -> Result<Document> {
        validate_collection_name(collection)?;
        let key = keys::document_key(collection, id);
        match self.db.get(&key) {
            Some(bytes) => record::decode_document(&bytes),
            None => Err(Error::NotFound(format!(
                "document {id:?} in collection {collection:?}"
            ))),
        }
    }

    /// True when the id is present in the collection.
    pub fn contains(&self, collection: &str, id: &str) -> Result<bool> {
        validate_collection_name(collection)?;
        Ok(self.db.get(&keys::document_key(collection, id)).is_some())
    }

    /// Persist a new document durably.
    ///
    /// The existence check and the write are not atomic: two concurrent
    /// puts with the same id can both pass the check, and the later write
    /// wins whole. A record is always a single store put, so the loser is
    /// overwritten entirely, never interleaved.
    pub fn put(&self, collection: &str, doc: &Document) -> Result<()> {
        validate_collection_name(collection)?;
        let key = keys::document_key(collection, &doc.id);
        if self.db.get(&key).is_some() {
            return Err(Error::AlreadyExists(format!(
                "document {:?} in collection {collection:?}",
                doc.id
            )));
        }
        let bytes = record::encode_document(doc)?;
        self.db.put(&key, &bytes)?;
        debug!(collection, id = %doc.id, "document persisted");
        Ok(())
    }

    /// Lazy scan over every document in the collection.
    ///
    /// Each call opens a fresh snapshot. Order follows key bytes, which
    /// is id-lexicographic and never relevance. A corrupt record aborts
    /// the scan with an error item; nothing is skipped silently.
    pub fn scan_all(&self, collection: &str) -> Result<ScanAll> {
        validate_collection_name(collection)?;
        let (lower, upper) = keys::scan_bounds(collection);
        Ok(ScanAll {
            entries: self.db.scan_range(&lower, &upper).into_iter(),
            poisoned: false,
        })
    }
}

/// Iterator over a collection's documents; see [`DocumentStore::scan_all`].
pub struct ScanAll {
    entries: std::vec::IntoIter<(Vec<u8>, Vec<u8>)>,
    poisoned: bool,
}

impl Iterator for ScanAll {
    type Item = Result<Document>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.poisoned {
            return None;
        }
        let (key, value) = self.entries.next()?;
        match record::decode_document(&value) {
            Ok(doc) => Some(Ok(doc)),
            Err(Error::CorruptRecord(reason)) => {
                self.poisoned = true;
                Some(Err(Error::CorruptRecord(format!(
                    "key {}: {reason}",
                    String::from_utf8_lossy(&key)
                ))))
            }
            Err(other) => {
                self.poisoned = true;
                Some(Err(other))
            }
        }
    }
}
