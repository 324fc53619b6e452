//! BTreeMap-backed ordered storage.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Ordered byte-key storage with cloned-range snapshots.
///
/// Reads and writes are safe from any thread. Range scans clone the
/// matching entries, so iteration never holds the lock and two scans of
/// an unmodified range observe identical sequences.
#[derive(Debug, Default)]
pub struct OrderedStore {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl OrderedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point lookup.
    pub fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.entries.read().get(key).cloned()
    }

    /// Insert or overwrite.
    pub fn insert(&self, key: Vec<u8>, value: Vec<u8>) {
        self.entries.write().insert(key, value);
    }

    /// All entries with `lower <= key < upper`, in byte-lexicographic
    /// order.
    pub fn range(&self, lower: &[u8], upper: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        if lower >= upper {
            return Vec::new();
        }
        self.entries
            .read()
            .range::<[u8], _>((Bound::Included(lower), Bound::Excluded(upper)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Every entry, in key order.
    pub fn scan_all(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.entries
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
