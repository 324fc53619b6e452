//! End-to-end tests over the public API.
//!
//! One harness binary with per-area modules, driven through the facade
//! exactly as a caller would use it.

mod collections;
mod durability;
mod ingest;
mod query;

use cairndb::prelude::*;
use std::sync::Arc;

/// Embedder with the fixture texts used across the suite.
///
/// Every fixture routes through here, so the test subscriber installs
/// exactly once.
pub fn fixture_embedder() -> Arc<StaticEmbedder> {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    Arc::new(
        StaticEmbedder::new()
            .with("The cat sat", vec![1.0, 0.0])
            .with("A dog ran", vec![0.0, 1.0])
            .with("cat", vec![1.0, 0.0])
            .with("dog", vec![0.0, 1.0])
            .with("both", vec![1.0, 1.0])
            .with("wide", vec![1.0, 0.0, 0.0]),
    )
}

pub fn ephemeral_db() -> Cairn {
    Cairn::ephemeral(fixture_embedder())
}

/// The two-document corpus from the similarity scenarios.
pub fn seeded_db() -> Cairn {
    let db = ephemeral_db();
    db.docs
        .add("docs", DocumentSpec::new("a", "The cat sat").with("source", "x"))
        .unwrap();
    db.docs
        .add("docs", DocumentSpec::new("b", "A dog ran").with("source", "y"))
        .unwrap();
    db
}
