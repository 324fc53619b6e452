//! Persisted document encoding.
//!
//! A record is one format-version byte followed by the bincode encoding
//! of the document. The version byte is persisted state: any change to
//! the field set or encoding bumps [`RECORD_FORMAT_VERSION`], and an
//! unknown version surfaces as a corrupt record instead of a misread.

use cairn_core::{Document, Error, Result};

/// Current document record format.
pub const RECORD_FORMAT_VERSION: u8 = 1;

/// Serialize a document for storage.
pub fn encode_document(doc: &Document) -> Result<Vec<u8>> {
    let mut bytes = vec![RECORD_FORMAT_VERSION];
    bincode::serialize_into(&mut bytes, doc)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    Ok(bytes)
}

/// Decode stored bytes; anything malformed is a corrupt record.
pub fn decode_document(bytes: &[u8]) -> Result<Document> {
    match bytes.split_first() {
        Some((&RECORD_FORMAT_VERSION, rest)) => bincode::deserialize(rest)
            .map_err(|e| Error::CorruptRecord(format!("undecodable document record: {e}"))),
        Some((&version, _)) => Err(Error::CorruptRecord(format!(
            "unknown record format version {version}"
        ))),
        None => Err(Error::CorruptRecord("empty document record".into())),
    }
}
