//! Database engine: recovery on open, strict-durability puts.
//!
//! The write path follows WAL-before-storage ordering: an entry is
//! appended and synced before the store mutation becomes visible, so a
//! put that returned is durable across restart and immediately visible
//! to readers on the same handle.

use crate::store::OrderedStore;
use crate::wal::{self, WalEntry, WalWriter};
use cairn_core::{Error, Result};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// WAL file name inside the database directory.
const WAL_FILENAME: &str = "wal.dat";

/// How writes reach stable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurabilityMode {
    /// Append + fsync on every put. A returned put survives crash.
    Strict,
    /// No disk at all; data lives and dies with the process.
    Ephemeral,
}

/// Ordered key-value database with durable puts and range scans.
///
/// Safe to share across threads behind an `Arc`; every operation takes
/// `&self`.
pub struct Database {
    store: OrderedStore,
    wal: Option<Mutex<WalWriter>>,
    dir: Option<PathBuf>,
    mode: DurabilityMode,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("dir", &self.dir)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Database {
    /// Open (or create) a database directory, recovering any existing log.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(dir).open()
    }

    /// In-memory database: no files, no recovery, nothing survives drop.
    pub fn ephemeral() -> Self {
        Self {
            store: OrderedStore::new(),
            wal: None,
            dir: None,
            mode: DurabilityMode::Ephemeral,
        }
    }

    /// Create a builder for database configuration.
    pub fn builder() -> DatabaseBuilder {
        DatabaseBuilder::new()
    }

    /// Point lookup.
    pub fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        self.store.get(key)
    }

    /// Durable put.
    ///
    /// The write reaches stable storage before it becomes visible and
    /// before this call returns. The store mutation happens while the log
    /// lock is held, so log order and visibility order are identical.
    pub fn put(&self, key: &[u8], value: &[u8]) -> Result<()> {
        match &self.wal {
            Some(wal) => {
                let mut writer = wal.lock();
                writer.append(&WalEntry::Put {
                    key: key.to_vec(),
                    value: value.to_vec(),
                })?;
                writer.sync()?;
                self.store.insert(key.to_vec(), value.to_vec());
            }
            None => self.store.insert(key.to_vec(), value.to_vec()),
        }
        Ok(())
    }

    /// Entries with `lower <= key < upper` in byte order. Each call takes
    /// a fresh snapshot.
    pub fn scan_range(&self, lower: &[u8], upper: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.store.range(lower, upper)
    }

    /// Every entry in key order.
    pub fn scan_all(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.store.scan_all()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Database directory, when disk-backed.
    pub fn path(&self) -> Option<&Path> {
        self.dir.as_deref()
    }

    /// Current durability mode.
    pub fn durability_mode(&self) -> DurabilityMode {
        self.mode
    }

    /// Force any buffered log bytes to stable storage.
    pub fn flush(&self) -> Result<()> {
        if let Some(wal) = &self.wal {
            wal.lock().sync()?;
        }
        Ok(())
    }
}

/// Builder for database configuration.
#[derive(Debug, Default)]
pub struct DatabaseBuilder {
    path: Option<PathBuf>,
}

impl DatabaseBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory for the database files.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Open the database, replaying the log if one exists.
    pub fn open(self) -> Result<Database> {
        let Some(dir) = self.path else {
            return Err(Error::Config(
                "database path not set; use Database::ephemeral() for no-disk operation".into(),
            ));
        };
        std::fs::create_dir_all(&dir)?;
        let wal_path = dir.join(WAL_FILENAME);

        let store = OrderedStore::new();
        if wal_path.exists() {
            let report = wal::replay(&wal_path, |entry| match entry {
                WalEntry::Put { key, value } => store.insert(key, value),
            })?;
            if report.truncated {
                warn!(valid_len = report.valid_len, "dropping torn WAL tail");
                let file = std::fs::OpenOptions::new().write(true).open(&wal_path)?;
                file.set_len(report.valid_len)?;
                file.sync_all()?;
            }
            info!(
                entries = report.entries,
                path = %wal_path.display(),
                "recovered write-ahead log"
            );
        }

        let writer = WalWriter::open(&wal_path)?;
        Ok(Database {
            store,
            wal: Some(Mutex::new(writer)),
            dir: Some(dir),
            mode: DurabilityMode::Strict,
        })
    }
}
