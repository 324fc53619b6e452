//! Collection lifecycle through the facade.

use crate::*;

#[test]
fn create_is_a_pure_pre_check() {
    let db = ephemeral_db();

    // Nothing is written, so creating twice in a row both succeed.
    db.collections.create("docs").unwrap();
    db.collections.create("docs").unwrap();
    assert!(!db.collections.exists("docs").unwrap());
}

#[test]
fn create_rejects_a_populated_collection() {
    let db = seeded_db();

    let err = db.collections.create("docs").unwrap_err();
    assert!(err.is_already_exists());
}

#[test]
fn existence_follows_the_first_document() {
    let db = ephemeral_db();
    assert!(!db.collections.exists("docs").unwrap());

    db.docs.add("docs", DocumentSpec::new("a", "The cat sat")).unwrap();
    assert!(db.collections.exists("docs").unwrap());
}

#[test]
fn invalid_names_are_rejected() {
    let db = ephemeral_db();

    for name in ["", "has:colon", "trailing;"] {
        let err = db.collections.create(name).unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)), "{name:?}");
    }
}

#[test]
fn count_and_list_reflect_contents() {
    let db = ephemeral_db();
    assert_eq!(db.collections.count("docs").unwrap(), 0);
    assert!(db.collections.list().is_empty());

    db.docs.add("zoo", DocumentSpec::new("d", "dog")).unwrap();
    db.docs.add("docs", DocumentSpec::new("a", "The cat sat")).unwrap();
    db.docs.add("docs", DocumentSpec::new("b", "A dog ran")).unwrap();

    assert_eq!(db.collections.count("docs").unwrap(), 2);
    assert_eq!(db.collections.count("zoo").unwrap(), 1);
    assert_eq!(db.collections.list(), vec!["docs".to_string(), "zoo".to_string()]);
}

#[test]
fn collections_are_isolated_namespaces() {
    let db = ephemeral_db();
    db.docs.add("one", DocumentSpec::new("a", "cat")).unwrap();
    db.docs.add("two", DocumentSpec::new("a", "dog")).unwrap();

    assert_eq!(db.docs.get("one", "a").unwrap().text, "cat");
    assert_eq!(db.docs.get("two", "a").unwrap().text, "dog");
    assert_eq!(db.collections.count("one").unwrap(), 1);
}
