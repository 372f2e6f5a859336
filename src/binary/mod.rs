// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk format for quarry indexes.
//!
//! An index is three files. The term dictionary is small and loaded whole;
//! the posting store is large and only ever seeked into; the ordinal table
//! turns result ordinals back into document identifiers. All integers are
//! fixed-width little-endian, all strings varint-length-prefixed UTF-8.
//!
//! ```text
//! TERM DICTIONARY                        POSTING STORE
//! ┌──────────────────────────────┐       ┌──────────────────────────────┐
//! │ count: i32                   │       │ bird ─┬ (ordinal:i32, tf:i32)│ 0
//! ├──────────────────────────────┤       │       └ (ordinal:i32, tf:i32)│ 8
//! │ "bird" │ offset: 0  │ n: 2   │──────▶│ cat  ─┬ (ordinal:i32, tf:i32)│ 16
//! │ "cat"  │ offset: 16 │ n: 2   │──────▶│       └ (ordinal:i32, tf:i32)│ 24
//! │ "dog"  │ offset: 32 │ n: 2   │──────▶│ dog  ─┬ (ordinal:i32, tf:i32)│ 32
//! └──────────────────────────────┘       │       └ (ordinal:i32, tf:i32)│ 40
//!                                        └──────────────────────────────┘
//! ORDINAL TABLE
//! ┌──────────────────────────────┐
//! │ count: i32                   │
//! │ id(0) │ id(1) │ … │ id(n-1)  │
//! └──────────────────────────────┘
//! ```
//!
//! Posting ranges `[offset, offset + n * 8)` are contiguous, never overlap,
//! and appear in the same order as the sorted dictionary. Within a range,
//! records are sorted by ascending ordinal.
//!
//! The document source file (`count:i32`, then `(id, text)` string pairs)
//! uses the same primitives and lives here too.

// Submodules
mod dictionary;
mod documents;
mod encoding;
mod ordinals;
mod postings;

pub use dictionary::{decode_dictionary, encode_dictionary};
pub use documents::{decode_documents, encode_documents};
pub use encoding::{
    decode_varint, encode_i32, encode_i64, encode_string, encode_varint, ByteReader,
    FieldOverflow, MAX_VARINT_BYTES,
};
pub use ordinals::{decode_ordinal_table, encode_ordinal_table};
pub use postings::{decode_postings, encode_postings, read_postings, POSTING_RECORD_SIZE};

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::{QuarryError, Result};

/// Which file a record came from. Used to label corruption errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    DocumentSource,
    OrdinalTable,
    TermDictionary,
    PostingStore,
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Artifact::DocumentSource => "document source",
            Artifact::OrdinalTable => "ordinal table",
            Artifact::TermDictionary => "term dictionary",
            Artifact::PostingStore => "posting store",
        };
        f.write_str(name)
    }
}

// ============================================================================
// FILE ACCESS
// ============================================================================

/// Read a whole index artifact, reporting a missing file as `MissingIndexFile`.
pub(crate) fn read_index_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| QuarryError::MissingIndexFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Open an index artifact for random-access reads.
pub(crate) fn open_index_file(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| QuarryError::MissingIndexFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Write an artifact, replacing whatever was there.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| QuarryError::io(path, e))
}

/// Map an error from an encoder. A value too wide for its field becomes
/// `LimitExceeded`; anything else is reported against the artifact.
pub(crate) fn encode_error(what: &'static str, err: io::Error) -> QuarryError {
    match err.get_ref().and_then(|e| e.downcast_ref::<FieldOverflow>()) {
        Some(overflow) => QuarryError::LimitExceeded {
            what: overflow.what,
            value: overflow.value,
            max: overflow.max,
        },
        None => QuarryError::Io {
            target: what.to_string(),
            source: err,
        },
    }
}
