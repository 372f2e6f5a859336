// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core value types shared by the builder and the query engine.

/// Dense zero-based document number assigned at build time.
pub type Ordinal = u32;

/// One document's occurrence count for one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posting {
    pub ordinal: Ordinal,
    /// Always >= 1; a document with no occurrences has no posting.
    pub frequency: u32,
}

impl Posting {
    pub fn new(ordinal: Ordinal, frequency: u32) -> Self {
        Self { ordinal, frequency }
    }
}

/// Location of a term's posting list inside the posting store.
///
/// The byte range `[offset, offset + count * POSTING_RECORD_SIZE)` holds
/// exactly this term's postings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermEntry {
    pub offset: u64,
    pub count: u32,
}

impl TermEntry {
    /// Byte offset one past the last record of this term.
    pub fn end(&self) -> u64 {
        self.offset + u64::from(self.count) * crate::binary::POSTING_RECORD_SIZE as u64
    }
}

/// A candidate document and its accumulated score for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    pub ordinal: Ordinal,
    pub score: f64,
}

/// A ranked result with its ordinal already resolved to an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub identifier: String,
    pub score: f64,
}
