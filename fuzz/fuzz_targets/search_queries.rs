// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for building and querying.
//!
//! Arbitrary documents and query lines must never panic, and every answer
//! must be ranked and limited to documents containing all present terms.

#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use quarry::build::build_index;
use quarry::query::{run_queries, QuerySession};

#[derive(Arbitrary, Debug)]
struct Input {
    documents: Vec<(String, String)>,
    queries: String,
}

fuzz_target!(|input: Input| {
    if input.documents.len() > 64 {
        return;
    }
    // Hits are checked by identifier, so identifiers must be unique
    let unique: std::collections::HashSet<&str> =
        input.documents.iter().map(|(id, _)| id.as_str()).collect();
    if unique.len() != input.documents.len() {
        return;
    }
    let docs: Vec<(&str, &str)> = input
        .documents
        .iter()
        .map(|(id, text)| (id.as_str(), text.as_str()))
        .collect();

    let built = build_index(docs.iter().copied()).expect("small corpora always build");
    let mut session =
        QuerySession::from_parts(built.identifiers, built.dictionary, Cursor::new(built.postings))
            .expect("fresh index should load");

    for line in input.queries.lines().take(8) {
        let hits = session.run(line).expect("fresh index has no corrupt records");
        for pair in hits.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for hit in &hits {
            let text = docs
                .iter()
                .find(|(id, _)| *id == hit.identifier)
                .map(|(_, text)| *text)
                .expect("hit names an indexed document");
            for term in line.split_whitespace() {
                if session.lookup(term).is_some() {
                    assert!(text.split_whitespace().any(|w| w == term));
                }
            }
        }
    }

    let mut sink = Vec::new();
    run_queries(&mut session, input.queries.as_bytes(), &mut sink, Some(5))
        .expect("query stream over memory cannot fail");
});
