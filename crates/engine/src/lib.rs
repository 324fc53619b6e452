//! Storage engine for Cairn.
//!
//! Ordered key-value storage with write-ahead durability:
//! - [`OrderedStore`]: BTreeMap-based storage with RwLock and
//!   cloned-range snapshots
//! - [`wal`]: length-prefixed, checksummed log with replay
//! - [`Database`]: recovery on open, strict-durability puts, ephemeral
//!   mode for tests and caching

#![warn(missing_docs)]

pub mod database;
pub mod store;
pub mod wal;

pub use database::{Database, DatabaseBuilder, DurabilityMode};
pub use store::OrderedStore;
pub use wal::{WalEntry, WalWriter};
