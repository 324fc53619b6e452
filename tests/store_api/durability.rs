//! Persistence across process restarts (simulated by reopening).

use crate::*;

#[test]
fn documents_survive_reopen() {
    let dir = tempfile::TempDir::new().unwrap();

    {
        let db = Cairn::open(dir.path(), fixture_embedder()).unwrap();
        db.docs
            .add("docs", DocumentSpec::new("a", "The cat sat").with("source", "x"))
            .unwrap();
        db.docs
            .add("docs", DocumentSpec::new("b", "A dog ran").with("source", "y"))
            .unwrap();
    }

    let db = Cairn::open(dir.path(), fixture_embedder()).unwrap();
    assert_eq!(db.collections.count("docs").unwrap(), 2);

    let doc = db.docs.get("docs", "a").unwrap();
    assert_eq!(doc.text, "The cat sat");
    assert_eq!(doc.embedding, vec![1.0, 0.0]);
    assert_eq!(doc.metadata.get("source"), Some(&Scalar::String("x".into())));
}

#[test]
fn queries_work_after_reopen() {
    let dir = tempfile::TempDir::new().unwrap();

    {
        let db = Cairn::open(dir.path(), fixture_embedder()).unwrap();
        db.docs
            .add("docs", DocumentSpec::new("a", "The cat sat").with("source", "x"))
            .unwrap();
        db.docs
            .add("docs", DocumentSpec::new("b", "A dog ran").with("source", "y"))
            .unwrap();
    }

    let db = Cairn::open(dir.path(), fixture_embedder()).unwrap();
    let hit = db.search.nearest("docs", "dog", &MetadataFilter::new()).unwrap().unwrap();
    assert_eq!(hit.document.id, "b");
    assert!((hit.score - 1.0).abs() < 1e-12);
}

#[test]
fn uniqueness_holds_across_reopen() {
    let dir = tempfile::TempDir::new().unwrap();

    {
        let db = Cairn::open(dir.path(), fixture_embedder()).unwrap();
        db.docs.add("docs", DocumentSpec::new("a", "The cat sat")).unwrap();
    }

    let db = Cairn::open(dir.path(), fixture_embedder()).unwrap();
    let err = db.docs.add("docs", DocumentSpec::new("a", "A dog ran")).unwrap_err();
    assert!(err.is_already_exists());

    let err = db.collections.create("docs").unwrap_err();
    assert!(err.is_already_exists());
}

#[test]
fn builder_requires_an_embedder() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Cairn::builder().path(dir.path()).open().unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn ephemeral_store_reports_its_mode() {
    let db = ephemeral_db();
    assert_eq!(db.durability_mode(), cairndb::DurabilityMode::Ephemeral);
    assert!(db.path().is_none());

    let dir = tempfile::TempDir::new().unwrap();
    let db = Cairn::open(dir.path(), fixture_embedder()).unwrap();
    assert_eq!(db.durability_mode(), cairndb::DurabilityMode::Strict);
    assert_eq!(db.path(), Some(dir.path()));
    db.flush().unwrap();
}
