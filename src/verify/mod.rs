// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index inspection and verification.
//!
//! The query engine trusts the dictionary to point at the right bytes and
//! only checks what it reads. Verification decodes everything up front and
//! checks the layout invariants the builder guarantees:
//!
//! 1. dictionary terms strictly ascending
//! 2. ranges contiguous, in dictionary order, covering the whole store
//! 3. postings within a range strictly ascending by ordinal
//! 4. every ordinal inside the ordinal table, every frequency >= 1
//!
//! If a manifest is present, artifact sizes, checksums and counts must match
//! it as well.

mod types;

pub use types::*;

use tracing::info;

use crate::binary::{
    decode_dictionary, decode_ordinal_table, decode_postings, read_index_file, Artifact,
    POSTING_RECORD_SIZE,
};
use crate::build::IndexManifest;
use crate::config::IndexPaths;
use crate::error::{QuarryError, Result};
use crate::types::TermEntry;

/// Cheap summary: decodes the small tables, only stats the posting store.
pub fn summarize_index(paths: &IndexPaths) -> Result<IndexSummary> {
    let ordinals = read_index_file(&paths.ordinals)?;
    let dictionary = read_index_file(&paths.dictionary)?;
    let postings_bytes = std::fs::metadata(&paths.postings)
        .map_err(|source| QuarryError::MissingIndexFile {
            path: paths.postings.clone(),
            source,
        })?
        .len();

    let identifiers = decode_ordinal_table(&ordinals)
        .map_err(|e| QuarryError::decode(Artifact::OrdinalTable, e))?;
    let entries = decode_dictionary(&dictionary)
        .map_err(|e| QuarryError::decode(Artifact::TermDictionary, e))?;

    Ok(IndexSummary {
        document_count: identifiers.len(),
        term_count: entries.len(),
        posting_count: postings_bytes / POSTING_RECORD_SIZE as u64,
        postings_bytes,
        dictionary_bytes: dictionary.len() as u64,
        ordinals_bytes: ordinals.len() as u64,
    })
}

/// Decode every artifact and check all layout invariants.
pub fn verify_index(paths: &IndexPaths) -> Result<VerificationReport> {
    let ordinals = read_index_file(&paths.ordinals)?;
    let dictionary = read_index_file(&paths.dictionary)?;
    let postings = read_index_file(&paths.postings)?;

    let identifiers = decode_ordinal_table(&ordinals)
        .map_err(|e| QuarryError::decode(Artifact::OrdinalTable, e))?;
    let entries = decode_dictionary(&dictionary)
        .map_err(|e| QuarryError::decode(Artifact::TermDictionary, e))?;

    check_layout(identifiers.len(), &entries, &postings)
        .map_err(|(artifact, violation)| QuarryError::corrupt(artifact, violation.to_string()))?;

    let summary = IndexSummary {
        document_count: identifiers.len(),
        term_count: entries.len(),
        posting_count: (postings.len() / POSTING_RECORD_SIZE) as u64,
        postings_bytes: postings.len() as u64,
        dictionary_bytes: dictionary.len() as u64,
        ordinals_bytes: ordinals.len() as u64,
    };

    let manifest = if paths.manifest.exists() {
        let manifest = IndexManifest::read(&paths.manifest)?;
        manifest.postings.verify(&postings)?;
        manifest.dictionary.verify(&dictionary)?;
        manifest.ordinals.verify(&ordinals)?;
        check_manifest_counts(&manifest, &summary)?;
        ManifestStatus::Verified
    } else {
        ManifestStatus::Absent
    };

    info!(
        documents = summary.document_count,
        terms = summary.term_count,
        postings = summary.posting_count,
        "index verified"
    );
    Ok(VerificationReport { summary, manifest })
}

/// Check the dictionary/posting-store invariants on decoded data.
pub fn check_layout(
    document_count: usize,
    entries: &[(String, TermEntry)],
    postings: &[u8],
) -> std::result::Result<(), (Artifact, InvariantError)> {
    let mut expected_offset = 0u64;

    for (position, (term, entry)) in entries.iter().enumerate() {
        if position > 0 {
            let previous = &entries[position - 1].0;
            if previous.as_bytes() >= term.as_bytes() {
                return Err((
                    Artifact::TermDictionary,
                    InvariantError::UnsortedDictionary {
                        position,
                        previous: previous.clone(),
                        term: term.clone(),
                    },
                ));
            }
        }

        if entry.offset != expected_offset {
            return Err((
                Artifact::TermDictionary,
                InvariantError::NonContiguousRange {
                    term: term.clone(),
                    expected_offset,
                    actual_offset: entry.offset,
                },
            ));
        }
        expected_offset = entry.end();
        if expected_offset > postings.len() as u64 {
            return Err((
                Artifact::TermDictionary,
                InvariantError::RangePastEnd {
                    term: term.clone(),
                    end: expected_offset,
                    store_len: postings.len() as u64,
                },
            ));
        }

        let records = decode_postings(&postings[entry.offset as usize..entry.end() as usize])
            .map_err(|e| {
                (
                    Artifact::PostingStore,
                    InvariantError::MalformedPostings {
                        term: term.clone(),
                        detail: e.to_string(),
                    },
                )
            })?;

        for (i, posting) in records.iter().enumerate() {
            if posting.ordinal as usize >= document_count {
                return Err((
                    Artifact::PostingStore,
                    InvariantError::OrdinalOutOfRange {
                        term: term.clone(),
                        ordinal: posting.ordinal,
                        documents: document_count,
                    },
                ));
            }
            if i > 0 && records[i - 1].ordinal >= posting.ordinal {
                return Err((
                    Artifact::PostingStore,
                    InvariantError::UnsortedPostingList {
                        term: term.clone(),
                        position: i,
                    },
                ));
            }
        }
    }

    if expected_offset != postings.len() as u64 {
        return Err((
            Artifact::PostingStore,
            InvariantError::UncoveredPostings {
                covered: expected_offset,
                store_len: postings.len() as u64,
            },
        ));
    }
    Ok(())
}

fn check_manifest_counts(manifest: &IndexManifest, summary: &IndexSummary) -> Result<()> {
    let checks = [
        ("document count", manifest.document_count as u64, summary.document_count as u64),
        ("term count", manifest.term_count as u64, summary.term_count as u64),
        ("posting count", manifest.posting_count as u64, summary.posting_count),
    ];
    for (what, recorded, actual) in checks {
        if recorded != actual {
            return Err(QuarryError::Manifest(format!(
                "{} is {}, manifest says {}",
                what, actual, recorded
            )));
        }
    }
    Ok(())
}
