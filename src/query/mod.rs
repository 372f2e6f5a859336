// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine: boolean-AND retrieval with TF-IDF ranking.
//!
//! A session loads the ordinal table and term dictionary whole, then keeps
//! one read handle on the posting store. Each query:
//!
//! 1. splits on whitespace (duplicates kept for scoring)
//! 2. fetches the posting list of each distinct term found in the dictionary
//! 3. intersects their document sets; unknown terms are skipped, not fatal
//! 4. scores the survivors (see [`scoring`]) and ranks them
//!
//! Sessions never write. Several sessions over the same files are fine.

pub mod scoring;
mod stream;

pub use scoring::{compare_ranked, inverse_document_frequency, rank, score_document, TermPostings};
pub use stream::{format_hit, run_queries};

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};

use tracing::{debug, info};

use crate::binary::{
    decode_dictionary, decode_ordinal_table, open_index_file, read_index_file, read_postings,
    Artifact,
};
use crate::config::IndexPaths;
use crate::error::{QuarryError, Result};
use crate::types::{Ordinal, Posting, ScoredDocument, SearchHit, TermEntry};
use crate::utils::tokenize;

/// An open index, ready to answer queries.
#[derive(Debug)]
pub struct QuerySession<R = BufReader<File>> {
    identifiers: Vec<String>,
    dictionary: HashMap<String, TermEntry>,
    postings: R,
    postings_len: u64,
}

impl QuerySession<BufReader<File>> {
    /// Load an index from disk.
    ///
    /// Fails with `MissingIndexFile` if any artifact cannot be opened and
    /// with `CorruptRecord` if the dictionary or ordinal table is malformed.
    pub fn load(paths: &IndexPaths) -> Result<Self> {
        let identifiers = decode_ordinal_table(&read_index_file(&paths.ordinals)?)
            .map_err(|e| QuarryError::decode(Artifact::OrdinalTable, e))?;
        let dictionary = decode_dictionary(&read_index_file(&paths.dictionary)?)
            .map_err(|e| QuarryError::decode(Artifact::TermDictionary, e))?;
        let postings = open_index_file(&paths.postings)?;

        let session = Self::from_parts(identifiers, dictionary, postings)?;
        info!(
            documents = session.document_count(),
            terms = session.term_count(),
            posting_bytes = session.postings_len,
            "loaded index"
        );
        Ok(session)
    }
}

impl<R: Read + Seek> QuerySession<R> {
    /// Assemble a session from decoded tables and any seekable posting store.
    ///
    /// Every dictionary range must lie inside the store; a range that does
    /// not is corruption and is rejected here rather than at query time.
    pub fn from_parts(
        identifiers: Vec<String>,
        entries: Vec<(String, TermEntry)>,
        mut postings: R,
    ) -> Result<Self> {
        let postings_len = postings
            .seek(SeekFrom::End(0))
            .map_err(posting_io_error)?;

        let mut dictionary = HashMap::with_capacity(entries.len());
        for (term, entry) in entries {
            if entry.end() > postings_len {
                return Err(QuarryError::corrupt(
                    Artifact::TermDictionary,
                    format!(
                        "range [{}, {}) of term {:?} exceeds posting store length {}",
                        entry.offset,
                        entry.end(),
                        term,
                        postings_len
                    ),
                ));
            }
            if let Some(previous) = dictionary.insert(term, entry) {
                return Err(QuarryError::corrupt(
                    Artifact::TermDictionary,
                    format!("duplicate term with ranges at {} and {}", previous.offset, entry.offset),
                ));
            }
        }

        Ok(Self {
            identifiers,
            dictionary,
            postings,
            postings_len,
        })
    }

    pub fn document_count(&self) -> usize {
        self.identifiers.len()
    }

    pub fn term_count(&self) -> usize {
        self.dictionary.len()
    }

    pub fn lookup(&self, term: &str) -> Option<TermEntry> {
        self.dictionary.get(term).copied()
    }

    pub fn identifier(&self, ordinal: Ordinal) -> Option<&str> {
        self.identifiers.get(ordinal as usize).map(String::as_str)
    }

    /// Read a term's full posting list. `None` if the term is not indexed.
    pub fn postings(&mut self, term: &str) -> Result<Option<Vec<Posting>>> {
        match self.lookup(term) {
            Some(entry) => self.fetch(&entry).map(Some),
            None => Ok(None),
        }
    }

    fn fetch(&mut self, entry: &TermEntry) -> Result<Vec<Posting>> {
        let postings = read_postings(&mut self.postings, entry).map_err(|e| {
            if e.kind() == io::ErrorKind::UnexpectedEof || e.kind() == io::ErrorKind::InvalidData {
                QuarryError::decode(Artifact::PostingStore, e)
            } else {
                posting_io_error(e)
            }
        })?;

        let total = self.identifiers.len();
        if let Some(bad) = postings.iter().find(|p| p.ordinal as usize >= total) {
            return Err(QuarryError::corrupt(
                Artifact::PostingStore,
                format!(
                    "ordinal {} at offset {} is outside the ordinal table ({} documents)",
                    bad.ordinal, entry.offset, total
                ),
            ));
        }
        Ok(postings)
    }

    /// Answer a query given as separate terms. Results are ranked.
    pub fn search_terms<S: AsRef<str>>(&mut self, terms: &[S]) -> Result<Vec<ScoredDocument>> {
        let mut matched: HashMap<&str, TermPostings> = HashMap::new();
        // None until the first dictionary term, then the running intersection
        let mut candidates: Option<BTreeSet<Ordinal>> = None;
        let mut seen = HashSet::new();

        for term in terms {
            let term: &str = term.as_ref();
            if !seen.insert(term) {
                continue;
            }
            let Some(entry) = self.dictionary.get(term).copied() else {
                debug!(term, "term not in dictionary; ignoring");
                continue;
            };

            let postings = self.fetch(&entry)?;
            let frequencies: HashMap<Ordinal, u32> =
                postings.iter().map(|p| (p.ordinal, p.frequency)).collect();

            candidates = Some(match candidates {
                None => frequencies.keys().copied().collect(),
                Some(mut running) => {
                    running.retain(|ordinal| frequencies.contains_key(ordinal));
                    running
                }
            });
            matched.insert(term, TermPostings { entry, frequencies });
        }

        let total = self.identifiers.len();
        let mut results: Vec<ScoredDocument> = candidates
            .unwrap_or_default()
            .into_iter()
            .map(|ordinal| ScoredDocument {
                ordinal,
                score: score_document(ordinal, terms, &matched, total),
            })
            .collect();
        rank(&mut results);

        debug!(
            terms = terms.len(),
            matched_terms = matched.len(),
            results = results.len(),
            "query answered"
        );
        Ok(results)
    }

    /// Answer one query line and resolve ordinals to identifiers.
    pub fn run(&mut self, query: &str) -> Result<Vec<SearchHit>> {
        self.run_limited(query, None)
    }

    /// Like [`run`](Self::run), keeping at most `limit` top results.
    pub fn run_limited(&mut self, query: &str, limit: Option<usize>) -> Result<Vec<SearchHit>> {
        let terms: Vec<&str> = tokenize(query).collect();
        let mut ranked = self.search_terms(&terms)?;
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        Ok(self.resolve(&ranked))
    }

    fn resolve(&self, ranked: &[ScoredDocument]) -> Vec<SearchHit> {
        // fetch() already rejected ordinals outside the table
        ranked
            .iter()
            .map(|doc| SearchHit {
                identifier: self.identifiers[doc.ordinal as usize].clone(),
                score: doc.score,
            })
            .collect()
    }
}

fn posting_io_error(source: io::Error) -> QuarryError {
    QuarryError::Io {
        target: Artifact::PostingStore.to_string(),
        source,
    }
}
