//! Boolean AND retrieval.

use crate::common::{ids, memory_session, ANIMALS};

#[test]
fn test_example_query() {
    let hits = memory_session(&ANIMALS).run("cat dog").unwrap();
    assert_eq!(ids(&hits), vec!["0"]);
    assert_eq!(hits[0].score, 3.0);
}

#[test]
fn test_every_term_must_match() {
    let mut session = memory_session(&[
        ("a", "red green blue"),
        ("b", "red green"),
        ("c", "red"),
    ]);
    assert_eq!(ids(&session.run("red").unwrap()), vec!["a", "b", "c"]);
    assert_eq!(ids(&session.run("red green").unwrap()), vec!["a", "b"]);
    assert_eq!(ids(&session.run("blue red green").unwrap()), vec!["a"]);
}

#[test]
fn test_disjoint_terms_match_nothing() {
    let mut session = memory_session(&[("a", "left"), ("b", "right")]);
    assert!(session.run("left right").unwrap().is_empty());
}

#[test]
fn test_unknown_terms_do_not_empty_result() {
    let mut session = memory_session(&ANIMALS);
    let with_noise = session.run("zebra cat okapi").unwrap();
    let plain = session.run("cat").unwrap();
    assert_eq!(with_noise, plain);
}

#[test]
fn test_only_unknown_terms() {
    let mut session = memory_session(&ANIMALS);
    assert!(session.run("zebra okapi").unwrap().is_empty());
}

#[test]
fn test_empty_and_blank_queries() {
    let mut session = memory_session(&ANIMALS);
    assert!(session.run("").unwrap().is_empty());
    assert!(session.run("   \t ").unwrap().is_empty());
}

#[test]
fn test_queries_are_not_normalized() {
    let mut session = memory_session(&ANIMALS);
    assert!(session.run("Cat").unwrap().is_empty());
    assert!(session.run("cat,").unwrap().is_empty());
}

#[test]
fn test_extra_whitespace_between_terms() {
    let mut session = memory_session(&ANIMALS);
    assert_eq!(session.run("  cat \t  dog  ").unwrap(), session.run("cat dog").unwrap());
}

#[test]
fn test_session_lookup() {
    let session = memory_session(&ANIMALS);
    assert_eq!(session.document_count(), 3);
    assert_eq!(session.term_count(), 3);
    assert_eq!(session.lookup("cat").map(|e| e.count), Some(2));
    assert!(session.lookup("zebra").is_none());
    assert_eq!(session.identifier(2), Some("2"));
    assert_eq!(session.identifier(3), None);
}
