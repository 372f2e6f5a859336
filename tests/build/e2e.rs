//! End-to-end tests for the build workflow.

use std::fs;

use quarry::build::run_build;
use quarry::config::IndexConfig;
use quarry::query::QuerySession;
use quarry::source::DocumentSet;
use quarry::verify::verify_index;
use tempfile::TempDir;

use crate::common::{ids, TAGGED_CORPUS};

#[test]
fn test_parse_build_search() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("documents.bin");
    let output = temp_dir.path().join("index");

    DocumentSet::from_tagged_corpus(TAGGED_CORPUS)
        .write_to(&source)
        .unwrap();
    let summary = run_build(&source, &output, &IndexConfig::default()).unwrap();

    assert!(summary.paths.postings.exists());
    assert!(summary.paths.dictionary.exists());
    assert!(summary.paths.ordinals.exists());
    assert!(summary.paths.manifest.exists());
    assert_eq!(summary.manifest.document_count, 3);

    let mut session = QuerySession::load(&summary.paths).unwrap();
    let hits = session.run("markets").unwrap();
    assert_eq!(ids(&hits), vec!["WSJ-001", "WSJ-002", "WSJ-003"]);
    assert!(hits.iter().all(|h| h.score == 1.0));

    let hits = session.run("rate cut").unwrap();
    assert_eq!(ids(&hits), vec!["WSJ-002"]);
    assert_eq!(hits[0].score, 6.0);
}

#[test]
fn test_custom_file_names() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("documents.bin");
    let output = temp_dir.path().join("index");

    let config = IndexConfig::from_json(
        r#"{"postingsFile": "postings_list.bin", "dictionaryFile": "dict.bin"}"#,
    )
    .unwrap();

    DocumentSet::from_tagged_corpus(TAGGED_CORPUS)
        .write_to(&source)
        .unwrap();
    run_build(&source, &output, &config).unwrap();

    assert!(output.join("postings_list.bin").exists());
    assert!(output.join("dict.bin").exists());
    assert!(output.join("doc_ids.bin").exists());
    assert!(!output.join("postings.bin").exists());

    let report = verify_index(&config.paths(&output)).unwrap();
    assert_eq!(report.summary.document_count, 3);
}

#[test]
fn test_rebuild_replaces_artifacts() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("documents.bin");
    let output = temp_dir.path().join("index");
    let config = IndexConfig::default();

    let big: DocumentSet = vec![("a", "one two three"), ("b", "four five six")]
        .into_iter()
        .collect();
    big.write_to(&source).unwrap();
    run_build(&source, &output, &config).unwrap();

    let small: DocumentSet = vec![("z", "one")].into_iter().collect();
    small.write_to(&source).unwrap();
    let summary = run_build(&source, &output, &config).unwrap();

    assert_eq!(fs::read(&summary.paths.postings).unwrap().len(), 8);
    let mut session = QuerySession::load(&summary.paths).unwrap();
    assert_eq!(ids(&session.run("one").unwrap()), vec!["z"]);
    assert!(session.run("four").unwrap().is_empty());
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = run_build(
        &temp_dir.path().join("absent.bin"),
        &temp_dir.path().join("index"),
        &IndexConfig::default(),
    );
    assert!(result.is_err(), "build should fail without a source file");
}

#[test]
fn test_empty_source_builds_empty_index() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("documents.bin");
    let output = temp_dir.path().join("index");

    DocumentSet::new().write_to(&source).unwrap();
    let summary = run_build(&source, &output, &IndexConfig::default()).unwrap();

    assert_eq!(fs::read(&summary.paths.postings).unwrap().len(), 0);
    assert_eq!(fs::read(&summary.paths.ordinals).unwrap(), vec![0, 0, 0, 0]);
    let mut session = QuerySession::load(&summary.paths).unwrap();
    assert!(session.run("anything").unwrap().is_empty());
}
