// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant violations and the report produced by a clean verification.

use std::fmt;

use crate::types::Ordinal;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Dictionary terms are not strictly ascending.
    UnsortedDictionary {
        position: usize,
        previous: String,
        term: String,
    },
    /// A term's range does not start where the previous one ended.
    NonContiguousRange {
        term: String,
        expected_offset: u64,
        actual_offset: u64,
    },
    /// A term's range runs past the end of the posting store.
    RangePastEnd {
        term: String,
        end: u64,
        store_len: u64,
    },
    /// The ranges do not cover the whole posting store.
    UncoveredPostings { covered: u64, store_len: u64 },
    /// A record in the range does not decode (negative ordinal, zero frequency).
    MalformedPostings { term: String, detail: String },
    /// Postings inside a range are not strictly ascending by ordinal.
    UnsortedPostingList { term: String, position: usize },
    /// A posting names a document the ordinal table does not have.
    OrdinalOutOfRange {
        term: String,
        ordinal: Ordinal,
        documents: usize,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::UnsortedDictionary {
                position,
                previous,
                term,
            } => write!(
                f,
                "term {:?} at position {} does not sort after {:?}",
                term, position, previous
            ),
            InvariantError::NonContiguousRange {
                term,
                expected_offset,
                actual_offset,
            } => write!(
                f,
                "range of {:?} starts at {}, expected {}",
                term, actual_offset, expected_offset
            ),
            InvariantError::RangePastEnd {
                term,
                end,
                store_len,
            } => write!(
                f,
                "range of {:?} ends at {} but posting store holds {} bytes",
                term, end, store_len
            ),
            InvariantError::UncoveredPostings { covered, store_len } => write!(
                f,
                "dictionary covers {} bytes but posting store holds {}",
                covered, store_len
            ),
            InvariantError::MalformedPostings { term, detail } => {
                write!(f, "postings of {:?} do not decode: {}", term, detail)
            }
            InvariantError::UnsortedPostingList { term, position } => write!(
                f,
                "postings of {:?} are not in ascending ordinal order at record {}",
                term, position
            ),
            InvariantError::OrdinalOutOfRange {
                term,
                ordinal,
                documents,
            } => write!(
                f,
                "posting of {:?} names ordinal {} but there are only {} documents",
                term, ordinal, documents
            ),
        }
    }
}

impl std::error::Error for InvariantError {}

/// Whether the manifest was present and matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestStatus {
    Verified,
    Absent,
}

/// Counts and sizes of an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub document_count: usize,
    pub term_count: usize,
    /// Derived from the posting store size.
    pub posting_count: u64,
    pub postings_bytes: u64,
    pub dictionary_bytes: u64,
    pub ordinals_bytes: u64,
}

/// Result of a full verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub summary: IndexSummary,
    pub manifest: ManifestStatus,
}
