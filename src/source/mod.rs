// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document source: the ordered `id -> normalized text` mapping the builder
//! consumes.
//!
//! The builder does not care where documents come from. This module is the
//! reference producer: it parses a tagged corpus, normalizes text, and reads
//! and writes the document source file.

mod parser;

pub use parser::parse_tagged_corpus;

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::binary::{decode_documents, encode_documents, encode_error, write_file, Artifact};
use crate::error::{QuarryError, Result};
use crate::utils::normalize;

/// Ordered mapping from document identifier to normalized text.
///
/// Iteration order is insertion order. Re-inserting an identifier replaces
/// its text in place; it does not move the document to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document. Returns `true` if the identifier was already present.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) -> bool {
        let id = id.into();
        let text = text.into();
        match self.positions.get(&id) {
            Some(&pos) => {
                warn!(id = %id, "duplicate document id; keeping the later text");
                self.documents[pos].1 = text;
                true
            }
            None => {
                self.positions.insert(id.clone(), self.documents.len());
                self.documents.push((id, text));
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.positions
            .get(id)
            .map(|&pos| self.documents[pos].1.as_str())
    }

    /// Documents in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(id, text)| (id.as_str(), text.as_str()))
    }

    /// Build a set from a tagged corpus, normalizing every text.
    pub fn from_tagged_corpus(corpus: &str) -> Self {
        parse_tagged_corpus(corpus)
            .into_iter()
            .map(|(id, raw)| (id, normalize(&raw)))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Document source file
    // ------------------------------------------------------------------------

    /// Decode a document source file. Texts are trimmed.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let documents = decode_documents(bytes)
            .map_err(|e| QuarryError::decode(Artifact::DocumentSource, e))?;
        Ok(documents
            .into_iter()
            .map(|(id, text)| {
                let trimmed = text.trim();
                let text = if trimmed.len() == text.len() {
                    text
                } else {
                    trimmed.to_string()
                };
                (id, text)
            })
            .collect())
    }

    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        encode_documents(self.iter(), self.len(), &mut buf)
            .map_err(|e| encode_error("document source", e))?;
        Ok(buf)
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| QuarryError::io(path, e))?;
        let set = Self::decode(&bytes)?;
        info!(path = %path.display(), documents = set.len(), "loaded document source");
        Ok(set)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_file(path, &self.encode()?)?;
        info!(path = %path.display(), documents = self.len(), "wrote document source");
        Ok(())
    }
}

impl<I: Into<String>, T: Into<String>> FromIterator<(I, T)> for DocumentSet {
    fn from_iter<It: IntoIterator<Item = (I, T)>>(iter: It) -> Self {
        let mut set = DocumentSet::new();
        for (id, text) in iter {
            set.insert(id, text);
        }
        set
    }
}
