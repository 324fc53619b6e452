//! Write-ahead log: framed, checksummed, replayable.
//!
//! File layout: a fixed header (magic + format version) followed by
//! records framed as `[len: u32 LE][xxh3: u64 LE][bincode entry]`. The
//! framing and the entry encoding are persisted state; any change bumps
//! [`WAL_FORMAT_VERSION`], and an unknown version refuses to replay
//! rather than misread.
//!
//! Replay applies every valid record in order and reports where the
//! first torn or corrupt record starts, so the caller can truncate the
//! tail and resume appending from a clean offset.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use cairn_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Read, Write};
use std::path::Path;
use xxhash_rust::xxh3::xxh3_64;

/// Magic bytes identifying a Cairn WAL file.
pub const WAL_MAGIC: [u8; 4] = *b"CWAL";

/// Bumped on any change to the record framing or entry encoding.
pub const WAL_FORMAT_VERSION: u16 = 1;

const HEADER_LEN: u64 = 6;
const FRAME_OVERHEAD: u64 = 4 + 8;

/// Upper bound on one record's payload; larger lengths mean a corrupt frame.
const MAX_RECORD_LEN: u32 = 256 * 1024 * 1024;

/// State-changing operations recorded in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WalEntry {
    /// Durable put of a serialized record under a composite key.
    Put {
        /// Storage key.
        key: Vec<u8>,
        /// Serialized record bytes.
        value: Vec<u8>,
    },
}

/// Appender for the write-ahead log.
pub struct WalWriter {
    file: File,
}

impl WalWriter {
    /// Open for appending, writing the header if the file is new.
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)?;
        if file.metadata()?.len() == 0 {
            file.write_all(&WAL_MAGIC)?;
            file.write_u16::<LittleEndian>(WAL_FORMAT_VERSION)?;
            file.sync_data()?;
        }
        Ok(Self { file })
    }

    /// Append one entry. Not durable until [`WalWriter::sync`] returns.
    pub fn append(&mut self, entry: &WalEntry) -> Result<()> {
        let payload =
            bincode::serialize(entry).map_err(|e| Error::Serialization(e.to_string()))?;
        self.file.write_u32::<LittleEndian>(payload.len() as u32)?;
        self.file.write_u64::<LittleEndian>(xxh3_64(&payload))?;
        self.file.write_all(&payload)?;
        Ok(())
    }

    /// Flush appended entries to stable storage.
    pub fn sync(&mut self) -> Result<()> {
        self.file.sync_data()?;
        Ok(())
    }
}

/// Outcome of a [`replay`] pass.
#[derive(Debug, Default)]
pub struct ReplayReport {
    /// Entries applied.
    pub entries: u64,
    /// Offset of the first byte past the last valid record.
    pub valid_len: u64,
    /// Whether a torn or corrupt tail follows `valid_len`.
    pub truncated: bool,
}

/// Replay every valid record, applying each entry in order.
///
/// Stops at the first torn or corrupt record; everything before it is
/// applied and `valid_len` marks where the writer should resume. The
/// header must be intact; a bad magic or unknown version is unrecoverable
/// and surfaces as [`Error::CorruptRecord`].
pub fn replay(path: &Path, mut apply: impl FnMut(WalEntry)) -> Result<ReplayReport> {
    let file = File::open(path)?;
    let total_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);

    let mut magic = [0u8; 4];
    reader
        .read_exact(&mut magic)
        .map_err(|_| Error::CorruptRecord("WAL header truncated".into()))?;
    if magic != WAL_MAGIC {
        return Err(Error::CorruptRecord("bad WAL magic".into()));
    }
    let version = reader
        .read_u16::<LittleEndian>()
        .map_err(|_| Error::CorruptRecord("WAL header truncated".into()))?;
    if version != WAL_FORMAT_VERSION {
        return Err(Error::CorruptRecord(format!(
            "unsupported WAL format version {version}"
        )));
    }

    let mut report = ReplayReport {
        valid_len: HEADER_LEN,
        ..Default::default()
    };
    loop {
        let len = match reader.read_u32::<LittleEndian>() {
            Ok(len) => len,
            Err(_) => break,
        };
        if len > MAX_RECORD_LEN {
            break;
        }
        let checksum = match reader.read_u64::<LittleEndian>() {
            Ok(checksum) => checksum,
            Err(_) => break,
        };
        let mut payload = vec![0u8; len as usize];
        if reader.read_exact(&mut payload).is_err() {
            break;
        }
        if xxh3_64(&payload) != checksum {
            break;
        }
        let entry: WalEntry = match bincode::deserialize(&payload) {
            Ok(entry) => entry,
            Err(_) => break,
        };
        apply(entry);
        report.entries += 1;
        report.valid_len += FRAME_OVERHEAD + len as u64;
    }
    report.truncated = report.valid_len < total_len;
    Ok(report)
}
