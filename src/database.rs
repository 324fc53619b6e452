//! Main database entry point for Cairn.

use crate::error::{Error, Result};
use crate::primitives::{Collections, Docs, Search};
use cairn_core::Embedder;
use cairn_engine::DurabilityMode;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The Cairn vector store.
///
/// This is the main entry point. Open a disk-backed store with
/// [`Cairn::open`], or an in-memory one with [`Cairn::ephemeral`].
///
/// # Example
///
/// ```ignore
/// use cairndb::prelude::*;
///
/// let db = Cairn::open("./my-db", embedder)?;
///
/// db.collections.create("docs")?;
/// db.docs.add("docs", DocumentSpec::new("a", "The cat sat"))?;
/// let hit = db.search.nearest("docs", "cat", &MetadataFilter::new())?;
/// ```
pub struct Cairn {
    /// The underlying engine database
    pub(crate) inner: Arc<cairn_engine::Database>,

    /// Collection management.
    pub collections: Collections,

    /// Document ingestion and lookup.
    pub docs: Docs,

    /// Nearest-neighbor queries.
    pub search: Search,
}

impl std::fmt::Debug for Cairn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cairn")
            .field("path", &self.path())
            .finish_non_exhaustive()
    }
}

impl Cairn {
    /// Open a disk-backed store, recovering existing data.
    ///
    /// Writes are strictly durable: a returned insert survives crash.
    pub fn open(path: impl AsRef<Path>, embedder: Arc<dyn Embedder>) -> Result<Self> {
        Self::builder().path(path).embedder(embedder).open()
    }

    /// In-memory store with no disk I/O.
    ///
    /// Creates no files and cannot recover; all data is gone on drop.
    /// Use for unit tests, caching, and temporary computation.
    pub fn ephemeral(embedder: Arc<dyn Embedder>) -> Self {
        Self::from_engine(Arc::new(cairn_engine::Database::ephemeral()), embedder)
    }

    /// Create a builder for store configuration.
    pub fn builder() -> CairnBuilder {
        CairnBuilder::new()
    }

    /// Force pending log bytes to stable storage.
    pub fn flush(&self) -> Result<()> {
        self.inner.flush().map_err(Error::from)
    }

    /// Database directory, when disk-backed.
    pub fn path(&self) -> Option<&Path> {
        self.inner.path()
    }

    /// Current durability mode.
    pub fn durability_mode(&self) -> DurabilityMode {
        self.inner.durability_mode()
    }

    fn from_engine(db: Arc<cairn_engine::Database>, embedder: Arc<dyn Embedder>) -> Self {
        Self {
            collections: Collections::new(db.clone()),
            docs: Docs::new(db.clone(), embedder.clone()),
            search: Search::new(db.clone(), embedder),
            inner: db,
        }
    }
}

/// Builder for store configuration.
///
/// # Example
///
/// ```ignore
/// let db = Cairn::builder()
///     .path("./my-db")
///     .embedder(embedder)
///     .open()?;
/// ```
#[derive(Default)]
pub struct CairnBuilder {
    path: Option<PathBuf>,
    embedder: Option<Arc<dyn Embedder>>,
}

impl CairnBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory for the store's files.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// The embedding collaborator used for ingestion and queries.
    pub fn embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.embedder = Some(embedder);
        self
    }

    /// Open the disk-backed store.
    pub fn open(self) -> Result<Cairn> {
        let embedder = self
            .embedder
            .ok_or_else(|| Error::Config("no embedder configured".into()))?;
        let path = self.path.ok_or_else(|| {
            Error::Config("no path configured; use Cairn::ephemeral for in-memory".into())
        })?;
        let db = Arc::new(cairn_engine::Database::open(path).map_err(Error::from)?);
        Ok(Cairn::from_engine(db, embedder))
    }

    /// Open an in-memory store, ignoring any configured path.
    pub fn ephemeral(self) -> Result<Cairn> {
        let embedder = self
            .embedder
            .ok_or_else(|| Error::Config("no embedder configured".into()))?;
        Ok(Cairn::ephemeral(embedder))
    }
}
