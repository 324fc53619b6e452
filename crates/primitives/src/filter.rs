//! Equality-based metadata filtering.

use cairn_core::{Metadata, Scalar};
use std::collections::BTreeMap;

/// Equality predicate over document metadata.
///
/// Keys are lower-cased when the filter is built, and document metadata
/// is looked up by the normalized key only. Values compare by exact
/// scalar equality, so cross-type pairs (filter `"3"` against stored `3`)
/// never match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataFilter {
    entries: BTreeMap<String, Scalar>,
}

impl MetadataFilter {
    /// An empty filter; matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality requirement. The key is lower-cased.
    pub fn equals(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.entries.insert(key.into().to_lowercase(), value.into());
        self
    }

    /// Number of requirements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no requirements exist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `metadata` satisfies every requirement.
    ///
    /// A missing key or an unequal value fails the predicate; the empty
    /// filter always matches.
    pub fn matches(&self, metadata: &Metadata) -> bool {
        self.entries
            .iter()
            .all(|(key, expected)| metadata.get(key) == Some(expected))
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for MetadataFilter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |filter, (k, v)| filter.equals(k, v))
    }
}
