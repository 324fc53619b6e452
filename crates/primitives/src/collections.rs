//! Collection management over the key-prefix scheme.
//!
//! Collections are implicit: one exists the moment a document with its
//! prefix is observable via a prefix scan. Creation is only a pre-check
//! that rejects names already holding documents; no collection record is
//! ever written.

use crate::keys;
use cairn_core::{Error, Result};
use cairn_engine::Database;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;

/// Validate a collection name against the key-prefix scheme.
///
/// `:` delimits the prefix and `;` is the creation probe's upper bound;
/// either byte inside a name corrupts the bound computation, so both are
/// rejected rather than escaped.
pub fn validate_collection_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "must not be empty",
        });
    }
    if name.contains(':') || name.contains(';') {
        return Err(Error::InvalidName {
            name: name.to_string(),
            reason: "must not contain ':' or ';'",
        });
    }
    Ok(())
}

/// Namespacing over the document store's key space.
#[derive(Clone)]
pub struct CollectionManager {
    db: Arc<Database>,
}

impl CollectionManager {
    /// Create a manager over a shared database handle.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Pre-check creation.
    ///
    /// Fails with `AlreadyExists` if any document already lives under the
    /// name's prefix; otherwise succeeds with no write, since collections
    /// come into being with their first document.
    pub fn create(&self, name: &str) -> Result<()> {
        validate_collection_name(name)?;
        let (lower, upper) = keys::probe_bounds(name);
        if !self.db.scan_range(&lower, &upper).is_empty() {
            return Err(Error::AlreadyExists(format!("collection {name:?}")));
        }
        debug!(collection = name, "collection created");
        Ok(())
    }

    /// True once the collection holds at least one document.
    pub fn exists(&self, name: &str) -> Result<bool> {
        validate_collection_name(name)?;
        let (lower, upper) = keys::probe_bounds(name);
        Ok(!self.db.scan_range(&lower, &upper).is_empty())
    }

    /// Number of documents in the collection.
    pub fn count(&self, name: &str) -> Result<usize> {
        validate_collection_name(name)?;
        let (lower, upper) = keys::scan_bounds(name);
        Ok(self.db.scan_range(&lower, &upper).len())
    }

    /// All collection names holding at least one document, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        for (key, _) in self.db.scan_all() {
            if let Some(name) = keys::collection_of(&key) {
                names.insert(name.to_string());
            }
        }
        names.into_iter().collect()
    }
}
