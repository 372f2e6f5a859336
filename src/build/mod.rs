// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction.
//!
//! One pass over the document source: assign ordinals, count term
//! occurrences, then lay the postings out term by term in sorted order. The
//! in-memory accumulator is a two-level `BTreeMap` (term, then ordinal), so
//! both the dictionary order and the record order inside each posting list
//! fall out of iteration and the same input always yields the same bytes.

pub mod manifest;

pub use manifest::*;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::binary::{
    encode_dictionary, encode_error, encode_ordinal_table, encode_postings, write_file,
    POSTING_RECORD_SIZE,
};
use crate::config::{IndexConfig, IndexPaths};
use crate::error::{QuarryError, Result};
use crate::source::DocumentSet;
use crate::types::{Ordinal, Posting, TermEntry};
use crate::utils::tokenize;

/// Largest count or value an `int32` field can hold.
pub const MAX_FIELD_VALUE: u64 = i32::MAX as u64;

fn check_limit(what: &'static str, value: u64) -> Result<()> {
    if value > MAX_FIELD_VALUE {
        return Err(QuarryError::LimitExceeded {
            what,
            value,
            max: MAX_FIELD_VALUE,
        });
    }
    Ok(())
}

// ============================================================================
// ACCUMULATION
// ============================================================================

/// Accumulates term frequencies document by document.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    identifiers: Vec<String>,
    frequencies: BTreeMap<String, BTreeMap<Ordinal, u32>>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` on whitespace and count each term under the next ordinal.
    ///
    /// Returns the ordinal assigned to this document.
    pub fn add_document(&mut self, identifier: &str, text: &str) -> Result<Ordinal> {
        let ordinal = self.identifiers.len() as u64;
        check_limit("document ordinal", ordinal)?;
        let ordinal = ordinal as Ordinal;

        for term in tokenize(text) {
            // Only allocate a key the first time a term is seen
            if let Some(per_doc) = self.frequencies.get_mut(term) {
                let frequency = per_doc.entry(ordinal).or_insert(0);
                *frequency += 1;
                check_limit("term frequency", u64::from(*frequency))?;
            } else {
                self.frequencies
                    .insert(term.to_string(), BTreeMap::from([(ordinal, 1)]));
            }
        }

        self.identifiers.push(identifier.to_string());
        Ok(ordinal)
    }

    pub fn document_count(&self) -> usize {
        self.identifiers.len()
    }

    /// Lay out postings in term order and produce the dictionary.
    pub fn finish(self) -> Result<BuiltIndex> {
        let mut postings = Vec::new();
        let mut dictionary = Vec::with_capacity(self.frequencies.len());
        let mut posting_total = 0usize;
        let mut cursor: u64 = 0;
        let mut list: Vec<Posting> = Vec::new();

        for (term, per_doc) in self.frequencies {
            check_limit("posting count", per_doc.len() as u64)?;
            list.clear();
            list.extend(per_doc.into_iter().map(|(o, f)| Posting::new(o, f)));

            encode_postings(&list, &mut postings).map_err(|e| encode_error("posting store", e))?;

            let entry = TermEntry {
                offset: cursor,
                count: list.len() as u32,
            };
            cursor += (list.len() * POSTING_RECORD_SIZE) as u64;
            posting_total += list.len();
            dictionary.push((term, entry));
        }

        debug_assert_eq!(cursor, postings.len() as u64);
        debug!(
            terms = dictionary.len(),
            postings = posting_total,
            "laid out posting store"
        );

        Ok(BuiltIndex {
            identifiers: self.identifiers,
            dictionary,
            postings,
            posting_count: posting_total,
        })
    }
}

/// Build an index from documents in iteration order.
pub fn build_index<'a, I>(documents: I) -> Result<BuiltIndex>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut builder = IndexBuilder::new();
    for (id, text) in documents {
        builder.add_document(id, text)?;
    }
    builder.finish()
}

// ============================================================================
// BUILT INDEX
// ============================================================================

/// A finished index held in memory, ready to be written.
#[derive(Debug, Clone)]
pub struct BuiltIndex {
    /// Identifier per ordinal.
    pub identifiers: Vec<String>,
    /// Sorted by term.
    pub dictionary: Vec<(String, TermEntry)>,
    /// Encoded posting store.
    pub postings: Vec<u8>,
    posting_count: usize,
}

impl BuiltIndex {
    pub fn document_count(&self) -> usize {
        self.identifiers.len()
    }

    pub fn term_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Total number of posting records across all terms.
    pub fn posting_count(&self) -> usize {
        self.posting_count
    }

    pub fn encode_dictionary(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        encode_dictionary(&self.dictionary, &mut buf)
            .map_err(|e| encode_error("term dictionary", e))?;
        Ok(buf)
    }

    pub fn encode_ordinals(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        encode_ordinal_table(&self.identifiers, &mut buf)
            .map_err(|e| encode_error("ordinal table", e))?;
        Ok(buf)
    }

    /// Write the three artifacts and the manifest, replacing any old index.
    pub fn write_to(&self, paths: &IndexPaths) -> Result<IndexManifest> {
        let dictionary = self.encode_dictionary()?;
        let ordinals = self.encode_ordinals()?;

        write_file(&paths.postings, &self.postings)?;
        write_file(&paths.dictionary, &dictionary)?;
        write_file(&paths.ordinals, &ordinals)?;

        let manifest = IndexManifest::describe(self, paths, &dictionary, &ordinals);
        manifest.write(&paths.manifest)?;
        Ok(manifest)
    }
}

// ============================================================================
// BUILD COMMAND
// ============================================================================

/// What a build produced, for the CLI summary.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub paths: IndexPaths,
    pub manifest: IndexManifest,
}

/// Read a document source file and write an index into `output_dir`.
pub fn run_build(input: &Path, output_dir: &Path, config: &IndexConfig) -> Result<BuildSummary> {
    let documents = DocumentSet::read_from(input)?;
    build_into(&documents, output_dir, config)
}

/// Index an in-memory document set into `output_dir`.
pub fn build_into(
    documents: &DocumentSet,
    output_dir: &Path,
    config: &IndexConfig,
) -> Result<BuildSummary> {
    let built = build_index(documents.iter())?;
    info!(
        documents = built.document_count(),
        terms = built.term_count(),
        postings = built.posting_count(),
        "built index"
    );

    fs::create_dir_all(output_dir).map_err(|e| QuarryError::io(output_dir, e))?;
    let paths = config.paths(output_dir);
    let manifest = built.write_to(&paths)?;
    info!(dir = %output_dir.display(), "wrote index");

    Ok(BuildSummary { paths, manifest })
}
