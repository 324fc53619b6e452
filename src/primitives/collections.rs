//! Collection management facade.

use crate::error::Result;
use cairn_primitives::CollectionManager;
use std::sync::Arc;

/// Collection operations.
///
/// Access via `db.collections`. Collections are implicit namespaces: one
/// exists as soon as it holds a document, and `create` is only a
/// pre-check against reuse.
pub struct Collections {
    mgr: CollectionManager,
}

impl Collections {
    pub(crate) fn new(db: Arc<cairn_engine::Database>) -> Self {
        Self {
            mgr: CollectionManager::new(db),
        }
    }

    /// Pre-check creation of a collection.
    ///
    /// Fails with `AlreadyExists` if any document already carries the
    /// prefix, and with `InvalidName` for names the key scheme cannot
    /// hold (empty, or containing `:` or `;`). Performs no write.
    pub fn create(&self, name: &str) -> Result<()> {
        Ok(self.mgr.create(name)?)
    }

    /// True once the collection holds at least one document.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.mgr.exists(name)?)
    }

    /// Number of documents under the collection prefix.
    pub fn count(&self, name: &str) -> Result<usize> {
        Ok(self.mgr.count(name)?)
    }

    /// All non-empty collection names, sorted.
    pub fn list(&self) -> Vec<String> {
        self.mgr.list()
    }
}
