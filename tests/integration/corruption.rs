//! Corrupt artifacts surface `CorruptRecord`, never a panic or a partial answer.

use std::fs;

use quarry::binary::Artifact;
use quarry::query::QuerySession;
use quarry::QuarryError;

use crate::common::{default_paths, disk_index, ANIMALS};

fn artifact_of(err: &QuarryError) -> Option<Artifact> {
    match err {
        QuarryError::CorruptRecord { artifact, .. } => Some(*artifact),
        _ => None,
    }
}

#[test]
fn test_truncated_posting_store() {
    let (dir, _) = disk_index(&ANIMALS);
    let paths = default_paths(dir.path());
    let bytes = fs::read(&paths.postings).unwrap();
    fs::write(&paths.postings, &bytes[..bytes.len() - 4]).unwrap();

    // "dog" now runs past the end of the store
    let err = QuerySession::load(&paths).unwrap_err();
    assert_eq!(artifact_of(&err), Some(Artifact::TermDictionary));
}

#[test]
fn test_truncated_dictionary() {
    let (dir, _) = disk_index(&ANIMALS);
    let paths = default_paths(dir.path());
    let bytes = fs::read(&paths.dictionary).unwrap();
    fs::write(&paths.dictionary, &bytes[..bytes.len() - 3]).unwrap();

    let err = QuerySession::load(&paths).unwrap_err();
    assert_eq!(artifact_of(&err), Some(Artifact::TermDictionary));
}

#[test]
fn test_negative_document_count() {
    let (dir, _) = disk_index(&ANIMALS);
    let paths = default_paths(dir.path());
    let mut bytes = fs::read(&paths.ordinals).unwrap();
    bytes[..4].copy_from_slice(&(-1i32).to_le_bytes());
    fs::write(&paths.ordinals, &bytes).unwrap();

    let err = QuerySession::load(&paths).unwrap_err();
    assert_eq!(artifact_of(&err), Some(Artifact::OrdinalTable));
}

#[test]
fn test_invalid_utf8_identifier() {
    let (dir, _) = disk_index(&ANIMALS);
    let paths = default_paths(dir.path());
    let mut bytes = fs::read(&paths.ordinals).unwrap();
    // count(4) + len(1) + "0": clobber the identifier byte
    bytes[5] = 0xFF;
    fs::write(&paths.ordinals, &bytes).unwrap();

    let err = QuerySession::load(&paths).unwrap_err();
    assert!(err.is_corruption());
}

#[test]
fn test_zero_frequency_posting() {
    let (dir, _) = disk_index(&ANIMALS);
    let paths = default_paths(dir.path());
    let mut bytes = fs::read(&paths.postings).unwrap();
    // frequency field of the first "bird" posting
    bytes[4..8].copy_from_slice(&0i32.to_le_bytes());
    fs::write(&paths.postings, &bytes).unwrap();

    let mut session = QuerySession::load(&paths).unwrap();
    let err = session.run("bird").unwrap_err();
    assert_eq!(artifact_of(&err), Some(Artifact::PostingStore));
    // Terms whose ranges are intact still answer
    assert_eq!(session.run("cat").unwrap().len(), 2);
}

#[test]
fn test_ordinal_beyond_table() {
    let (dir, _) = disk_index(&ANIMALS);
    let paths = default_paths(dir.path());
    let mut bytes = fs::read(&paths.postings).unwrap();
    bytes[0..4].copy_from_slice(&7i32.to_le_bytes());
    fs::write(&paths.postings, &bytes).unwrap();

    let mut session = QuerySession::load(&paths).unwrap();
    let err = session.run("bird").unwrap_err();
    assert_eq!(artifact_of(&err), Some(Artifact::PostingStore));
}
