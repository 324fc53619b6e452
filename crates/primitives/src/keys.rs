//! Composite-key scheme: `"<collection>:<id>"`.
//!
//! The separator `:` (0x3a) and its byte successor `;` (0x3b) are
//! adjacent in ordering, so `[name + ":", name + ";")` covers exactly the
//! keys of one collection and nothing from a collection whose name merely
//! extends `name`. Names must not contain either byte; see
//! [`validate_collection_name`](crate::collections::validate_collection_name).

/// Separator between the collection prefix and the document id.
pub const SEPARATOR: u8 = b':';

/// The byte immediately after the separator in ordering; upper bound for
/// creation probes.
pub const SEPARATOR_SUCCESSOR: u8 = b';';

/// Storage key for a document.
pub fn document_key(collection: &str, id: &str) -> Vec<u8> {
    let mut key = Vec::with_capacity(collection.len() + 1 + id.len());
    key.extend_from_slice(collection.as_bytes());
    key.push(SEPARATOR);
    key.extend_from_slice(id.as_bytes());
    key
}

/// Bounds used by collection creation to probe for any existing key:
/// `[name + ":", name + ";")`.
pub fn probe_bounds(collection: &str) -> (Vec<u8>, Vec<u8>) {
    let mut lower = collection.as_bytes().to_vec();
    lower.push(SEPARATOR);
    let mut upper = collection.as_bytes().to_vec();
    upper.push(SEPARATOR_SUCCESSOR);
    (lower, upper)
}

/// Bounds used by full-collection scans: `[c + ":", c + ":" + 0xFF)`.
/// 0xFF never occurs in UTF-8, so no document id reaches the upper bound.
pub fn scan_bounds(collection: &str) -> (Vec<u8>, Vec<u8>) {
    let mut lower = collection.as_bytes().to_vec();
    lower.push(SEPARATOR);
    let mut upper = lower.clone();
    upper.push(0xFF);
    (lower, upper)
}

/// Collection prefix of a stored key, if well-formed.
pub fn collection_of(key: &[u8]) -> Option<&str> {
    let sep = key.iter().position(|&b| b == SEPARATOR)?;
    std::str::from_utf8(&key[..sep]).ok()
}
