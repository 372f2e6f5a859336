//! Tests for the artifact layout produced by the builder.

use quarry::binary::{decode_dictionary, decode_ordinal_table, decode_postings};
use quarry::build::{build_index, IndexBuilder};
use quarry::types::{Posting, TermEntry};

use crate::common::ANIMALS;

#[test]
fn test_animals_layout() {
    let built = build_index(ANIMALS).unwrap();

    assert_eq!(built.identifiers, vec!["0", "1", "2"]);
    assert_eq!(
        built.dictionary,
        vec![
            ("bird".to_string(), TermEntry { offset: 0, count: 2 }),
            ("cat".to_string(), TermEntry { offset: 16, count: 2 }),
            ("dog".to_string(), TermEntry { offset: 32, count: 2 }),
        ]
    );
    assert_eq!(
        decode_postings(&built.postings).unwrap(),
        vec![
            Posting::new(1, 1),
            Posting::new(2, 1),
            Posting::new(0, 1),
            Posting::new(2, 1),
            Posting::new(0, 1),
            Posting::new(1, 1),
        ]
    );
}

#[test]
fn test_encoded_tables_decode_back() {
    let built = build_index(ANIMALS).unwrap();

    let ordinals = decode_ordinal_table(&built.encode_ordinals().unwrap()).unwrap();
    assert_eq!(ordinals, built.identifiers);

    let dictionary = decode_dictionary(&built.encode_dictionary().unwrap()).unwrap();
    assert_eq!(dictionary, built.dictionary);
}

#[test]
fn test_ordinal_table_bytes() {
    let built = build_index([("ab", "x")]).unwrap();
    // count = 1, then varint length 2 + "ab"
    assert_eq!(
        built.encode_ordinals().unwrap(),
        vec![1, 0, 0, 0, 2, b'a', b'b']
    );
}

#[test]
fn test_dictionary_entry_bytes() {
    let built = build_index([("d", "cat")]).unwrap();
    let mut expected = vec![1, 0, 0, 0, 3, b'c', b'a', b't'];
    expected.extend_from_slice(&0i64.to_le_bytes());
    expected.extend_from_slice(&1i32.to_le_bytes());
    assert_eq!(built.encode_dictionary().unwrap(), expected);
}

#[test]
fn test_repeated_terms_accumulate_frequency() {
    let built = build_index([("a", "cat cat cat dog"), ("b", "cat")]).unwrap();
    let cat = &built.dictionary[0];
    assert_eq!(cat.0, "cat");
    let records = decode_postings(&built.postings[..16]).unwrap();
    assert_eq!(records, vec![Posting::new(0, 3), Posting::new(1, 1)]);
}

#[test]
fn test_posting_counts_are_document_counts() {
    let built = build_index([("a", "x x y"), ("b", "x"), ("c", "y y")]).unwrap();
    for (term, entry) in &built.dictionary {
        let expected = match term.as_str() {
            "x" => 2,
            "y" => 2,
            other => panic!("unexpected term {}", other),
        };
        assert_eq!(entry.count, expected, "term {}", term);
    }
    assert_eq!(built.posting_count(), 4);
}

#[test]
fn test_document_without_terms_still_gets_ordinal() {
    let mut builder = IndexBuilder::new();
    assert_eq!(builder.add_document("empty", "").unwrap(), 0);
    assert_eq!(builder.add_document("full", "word").unwrap(), 1);
    let built = builder.finish().unwrap();

    assert_eq!(built.document_count(), 2);
    assert_eq!(built.term_count(), 1);
    assert_eq!(built.dictionary[0].1, TermEntry { offset: 0, count: 1 });
    assert_eq!(
        decode_postings(&built.postings).unwrap(),
        vec![Posting::new(1, 1)]
    );
}

#[test]
fn test_builds_are_byte_identical() {
    let a = build_index(ANIMALS).unwrap();
    let b = build_index(ANIMALS).unwrap();
    assert_eq!(a.postings, b.postings);
    assert_eq!(a.encode_dictionary().unwrap(), b.encode_dictionary().unwrap());
    assert_eq!(a.encode_ordinals().unwrap(), b.encode_ordinals().unwrap());
}
