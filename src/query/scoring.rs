// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind ranking.
//!
//! Deliberately simple: a term's weight is the inverse of its document
//! frequency with no logarithm, so a term in half the corpus weighs 2 and a
//! term in one of a hundred documents weighs 100.
//!
//! ```text
//! score(d) = Σ  tf(t, d) × N / df(t)
//!           t∈q
//! ```
//!
//! `N` is the document count and `df(t)` the term's posting count. The sum
//! runs over query term *occurrences*: a term typed twice counts twice.
//! Terms missing from the dictionary contribute nothing.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Ordinal, ScoredDocument, TermEntry};

/// Postings fetched for one query term.
#[derive(Debug, Clone)]
pub struct TermPostings {
    pub entry: TermEntry,
    pub frequencies: HashMap<Ordinal, u32>,
}

impl TermPostings {
    /// Frequency of the term in `ordinal`, zero if the document lacks it.
    pub fn frequency(&self, ordinal: Ordinal) -> u32 {
        self.frequencies.get(&ordinal).copied().unwrap_or(0)
    }
}

/// Inverse document frequency without log dampening: `N / df`.
pub fn inverse_document_frequency(total_documents: usize, posting_count: u32) -> f64 {
    total_documents as f64 / f64::from(posting_count)
}

/// Score one document against the query's term occurrences.
pub fn score_document<S: AsRef<str>>(
    ordinal: Ordinal,
    query_terms: &[S],
    matched: &HashMap<&str, TermPostings>,
    total_documents: usize,
) -> f64 {
    query_terms
        .iter()
        .filter_map(|term| matched.get(term.as_ref()))
        .map(|postings| {
            f64::from(postings.frequency(ordinal))
                * inverse_document_frequency(total_documents, postings.entry.count)
        })
        .sum()
}

/// Score descending, then ordinal ascending.
pub fn compare_ranked(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.ordinal.cmp(&b.ordinal))
}

/// Sort in place into final ranking order.
pub fn rank(results: &mut [ScoredDocument]) {
    results.sort_by(compare_ranked);
}
