// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the artifact decoders.
//!
//! Arbitrary bytes go through every decoder and, as a posting store, through
//! a query session. Malformed input must come back as an error, never a
//! panic, and nothing decoded may point outside its buffer.

#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use quarry::binary::{
    decode_dictionary, decode_documents, decode_ordinal_table, decode_postings,
    POSTING_RECORD_SIZE,
};
use quarry::query::QuerySession;

fuzz_target!(|data: &[u8]| {
    if let Ok(postings) = decode_postings(data) {
        assert_eq!(postings.len() * POSTING_RECORD_SIZE, data.len());
        assert!(postings.iter().all(|p| p.frequency >= 1));
    }
    let _ = decode_ordinal_table(data);
    let _ = decode_documents(data);

    if let Ok(entries) = decode_dictionary(data) {
        // Reuse the input as a posting store for the decoded dictionary
        let identifiers: Vec<String> = (0..16).map(|i| i.to_string()).collect();
        let terms: Vec<String> = entries.iter().map(|(t, _)| t.clone()).collect();
        if let Ok(mut session) =
            QuerySession::from_parts(identifiers, entries, Cursor::new(data.to_vec()))
        {
            for term in &terms {
                let _ = session.run(term);
            }
        }
    }
});
