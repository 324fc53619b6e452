//! Ingestion through the facade: single, batch, concurrent, cancelled.

use crate::*;
use std::time::Duration;

#[test]
fn add_then_get_returns_an_equal_document() {
    let db = ephemeral_db();
    db.docs
        .add("docs", DocumentSpec::new("a", "The cat sat").with("source", "x"))
        .unwrap();

    let doc = db.docs.get("docs", "a").unwrap();
    assert_eq!(doc.id, "a");
    assert_eq!(doc.text, "The cat sat");
    assert_eq!(doc.embedding, vec![1.0, 0.0]);
    assert_eq!(doc.metadata.get("source"), Some(&Scalar::String("x".into())));
}

#[test]
fn get_missing_document_is_not_found() {
    let db = ephemeral_db();
    assert!(db.docs.get("docs", "ghost").unwrap_err().is_not_found());
}

#[test]
fn duplicate_id_fails_and_preserves_the_original() {
    let db = ephemeral_db();
    db.docs.add("docs", DocumentSpec::new("a", "The cat sat")).unwrap();

    let err = db.docs.add("docs", DocumentSpec::new("a", "A dog ran")).unwrap_err();
    assert!(err.is_already_exists());

    let stored = db.docs.get("docs", "a").unwrap();
    assert_eq!(stored.text, "The cat sat");
    assert_eq!(db.collections.count("docs").unwrap(), 1);
}

#[test]
fn embedding_failure_performs_no_write() {
    let db = ephemeral_db();
    let err = db.docs.add("docs", DocumentSpec::new("a", "not registered")).unwrap_err();
    assert!(err.is_retryable());
    assert!(!db.collections.exists("docs").unwrap());
}

#[test]
fn batch_add_persists_all_documents() {
    let db = ephemeral_db();
    db.docs
        .add_batch(
            "docs",
            vec![
                DocumentSpec::new("a", "The cat sat"),
                DocumentSpec::new("b", "A dog ran"),
                DocumentSpec::new("c", "both"),
            ],
        )
        .unwrap();

    assert_eq!(db.collections.count("docs").unwrap(), 3);
    let ids: Vec<String> = db.docs.all("docs").unwrap().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn batch_failure_reports_one_error_and_keeps_successes() {
    let db = ephemeral_db();
    let err = db
        .docs
        .add_batch(
            "docs",
            vec![
                DocumentSpec::new("a", "The cat sat"),
                DocumentSpec::new("bad", "not registered"),
                DocumentSpec::new("c", "both"),
            ],
        )
        .unwrap_err();

    assert!(err.is_retryable());
    assert!(db.docs.get("docs", "a").is_ok());
    assert!(db.docs.get("docs", "bad").unwrap_err().is_not_found());
    assert!(db.docs.get("docs", "c").is_ok());
}

#[test]
fn batch_worker_cap_does_not_change_results() {
    let db = ephemeral_db();
    let opts = BatchOptions {
        max_workers: Some(1),
        ..Default::default()
    };
    db.docs
        .add_batch_with(
            "docs",
            vec![
                DocumentSpec::new("a", "The cat sat"),
                DocumentSpec::new("b", "A dog ran"),
            ],
            &opts,
        )
        .unwrap();
    assert_eq!(db.collections.count("docs").unwrap(), 2);
}

#[test]
fn cancelled_batch_fails_with_cancelled() {
    let db = ephemeral_db();
    let (cancel, handle) = Cancellation::token();
    handle.cancel();
    let opts = BatchOptions {
        max_workers: None,
        cancel,
    };

    let err = db
        .docs
        .add_batch_with("docs", vec![DocumentSpec::new("a", "The cat sat")], &opts)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
    assert!(!db.collections.exists("docs").unwrap());
}

#[test]
fn expired_deadline_cancels_an_add() {
    let db = ephemeral_db();
    let cancel = Cancellation::with_deadline(Duration::ZERO);
    let err = db
        .docs
        .add_with("docs", DocumentSpec::new("a", "The cat sat"), &cancel)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[test]
fn scans_of_an_unmodified_collection_are_identical() {
    let db = seeded_db();
    let first = db.docs.all("docs").unwrap();
    let second = db.docs.all("docs").unwrap();
    assert_eq!(first, second);
}

#[test]
fn concurrent_same_id_adds_end_consistently() {
    let db = std::sync::Arc::new(ephemeral_db());

    std::thread::scope(|scope| {
        for _ in 0..2 {
            let db = db.clone();
            scope.spawn(move || {
                // Under check-then-act both may pass the uniqueness
                // check; last writer wins whole.
                let _ = db.docs.add("docs", DocumentSpec::new("a", "The cat sat"));
            });
        }
    });

    assert_eq!(db.collections.count("docs").unwrap(), 1);
    let stored = db.docs.get("docs", "a").unwrap();
    assert_eq!(stored.text, "The cat sat");
    assert_eq!(stored.embedding, vec![1.0, 0.0]);
}
