//! Query scenarios through the facade.

use crate::*;

#[test]
fn nearest_without_filter_finds_the_closest_document() {
    let db = seeded_db();

    let hit = db.search.nearest("docs", "cat", &MetadataFilter::new()).unwrap().unwrap();
    assert_eq!(hit.document.id, "a");
    assert!((hit.score - 1.0).abs() < 1e-12);
}

#[test]
fn filter_wins_over_vector_closeness() {
    let db = seeded_db();

    let filter = MetadataFilter::new().equals("source", "y");
    let hit = db.search.nearest("docs", "cat", &filter).unwrap().unwrap();
    assert_eq!(hit.document.id, "b");
}

#[test]
fn empty_collection_returns_none_without_error() {
    let db = ephemeral_db();
    assert!(db.search.nearest("docs", "cat", &MetadataFilter::new()).unwrap().is_none());
}

#[test]
fn unmatched_filter_returns_none() {
    let db = seeded_db();
    let filter = MetadataFilter::new().equals("source", "nowhere");
    assert!(db.search.nearest("docs", "cat", &filter).unwrap().is_none());
}

#[test]
fn filter_keys_are_case_normalized() {
    let db = seeded_db();
    let filter = MetadataFilter::new().equals("SOURCE", "y");
    let hit = db.search.nearest("docs", "cat", &filter).unwrap().unwrap();
    assert_eq!(hit.document.id, "b");
}

#[test]
fn filter_values_are_compared_exactly() {
    let db = seeded_db();

    // Value comparison stays case-sensitive even though keys normalize.
    let filter = MetadataFilter::new().equals("source", "Y");
    assert!(db.search.nearest("docs", "cat", &filter).unwrap().is_none());

    // And cross-type comparison never matches.
    let db = ephemeral_db();
    db.docs.add("docs", DocumentSpec::new("n", "cat").with("rank", 3i64)).unwrap();
    let filter = MetadataFilter::new().equals("rank", "3");
    assert!(db.search.nearest("docs", "cat", &filter).unwrap().is_none());
}

#[test]
fn mismatched_embedding_lengths_are_skipped() {
    let db = seeded_db();
    db.docs.add("docs", DocumentSpec::new("w", "wide")).unwrap();

    // The 3-dimensional query can only score the 3-dimensional document.
    let hit = db.search.nearest("docs", "wide", &MetadataFilter::new()).unwrap().unwrap();
    assert_eq!(hit.document.id, "w");

    // And 2-dimensional queries never see it.
    let hit = db.search.nearest("docs", "cat", &MetadataFilter::new()).unwrap().unwrap();
    assert_eq!(hit.document.id, "a");
}

#[test]
fn tie_keeps_the_first_document_in_scan_order() {
    let db = ephemeral_db();
    db.docs.add("docs", DocumentSpec::new("n2", "cat")).unwrap();
    db.docs.add("docs", DocumentSpec::new("n1", "The cat sat")).unwrap();

    let hit = db.search.nearest("docs", "cat", &MetadataFilter::new()).unwrap().unwrap();
    assert_eq!(hit.document.id, "n1");
}

#[test]
fn query_on_unknown_text_fails_with_embedding_error() {
    let db = seeded_db();
    let err = db.search.nearest("docs", "never registered", &MetadataFilter::new()).unwrap_err();
    assert!(err.is_retryable());
}

#[test]
fn cancelled_query_fails_with_cancelled() {
    let db = seeded_db();
    let (cancel, handle) = Cancellation::token();
    handle.cancel();

    let err = db
        .search
        .nearest_with("docs", "cat", &MetadataFilter::new(), &cancel)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[test]
fn scores_are_reported_alongside_matches() {
    let db = ephemeral_db();
    db.docs.add("docs", DocumentSpec::new("d", "A dog ran")).unwrap();

    // "both" is at 45 degrees from the stored dog vector.
    let hit = db.search.nearest("docs", "both", &MetadataFilter::new()).unwrap().unwrap();
    assert!((hit.score - (0.5f64).sqrt()).abs() < 1e-12);
}
