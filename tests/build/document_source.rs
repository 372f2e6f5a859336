//! Tests for corpus parsing and the document source file.

use quarry::source::{parse_tagged_corpus, DocumentSet};
use tempfile::TempDir;

use crate::common::TAGGED_CORPUS;

#[test]
fn test_parse_extracts_all_documents_in_order() {
    let raw = parse_tagged_corpus(TAGGED_CORPUS);
    let ids: Vec<&str> = raw.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, vec!["WSJ-001", "WSJ-002", "WSJ-003"]);
}

#[test]
fn test_corpus_texts_are_normalized() {
    let set = DocumentSet::from_tagged_corpus(TAGGED_CORPUS);
    assert_eq!(set.get("WSJ-001"), Some("the fed raised rates markets fell"));
    assert_eq!(
        set.get("WSJ-002"),
        Some("markets rallied after the rate cut rumor")
    );
    assert_eq!(set.get("WSJ-003"), Some("bond markets were quiet"));
}

#[test]
fn test_source_file_survives_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("documents.bin");

    let set = DocumentSet::from_tagged_corpus(TAGGED_CORPUS);
    set.write_to(&path).unwrap();
    let loaded = DocumentSet::read_from(&path).unwrap();

    assert_eq!(loaded, set);
}

#[test]
fn test_missing_source_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = DocumentSet::read_from(&dir.path().join("nope.bin")).unwrap_err();
    assert!(matches!(err, quarry::QuarryError::Io { .. }));
}

#[test]
fn test_truncated_source_file_is_corrupt() {
    let set: DocumentSet = vec![("a", "one two"), ("b", "three")].into_iter().collect();
    let bytes = set.encode().unwrap();
    let err = DocumentSet::decode(&bytes[..bytes.len() - 2]).unwrap_err();
    assert!(err.is_corruption());
}
