// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Posting store records.
//!
//! Postings are the heart of an inverted index: for each term, which documents
//! contain it and how often? Every posting is a fixed 8-byte record,
//! `ordinal:i32` then `frequency:i32`, so a term's list can be fetched with one
//! seek and one exact-length read. No delta coding, no skip lists; the store
//! is meant to be addressed, not scanned.

use std::io::{self, Read, Seek, SeekFrom};

use super::encoding::{encode_i32, to_i32, ByteReader};
use crate::types::{Posting, TermEntry};

/// Size of one `(ordinal, frequency)` record in bytes.
pub const POSTING_RECORD_SIZE: usize = 8;

// ============================================================================
// ENCODING
// ============================================================================

/// Append a posting list as consecutive fixed-size records.
pub fn encode_postings(postings: &[Posting], buf: &mut Vec<u8>) -> io::Result<()> {
    buf.reserve(postings.len() * POSTING_RECORD_SIZE);
    for posting in postings {
        encode_i32(to_i32(posting.ordinal as usize, "document ordinal")?, buf);
        encode_i32(to_i32(posting.frequency as usize, "term frequency")?, buf);
    }
    Ok(())
}

// ============================================================================
// DECODING
// ============================================================================

/// Decode a run of posting records.
///
/// The slice must be a whole number of records. Negative ordinals and
/// frequencies below one are rejected: the builder never writes them.
pub fn decode_postings(bytes: &[u8]) -> io::Result<Vec<Posting>> {
    if bytes.len() % POSTING_RECORD_SIZE != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Posting bytes ({}) are not a multiple of the {}-byte record size",
                bytes.len(),
                POSTING_RECORD_SIZE
            ),
        ));
    }

    let mut reader = ByteReader::new(bytes);
    let mut postings = Vec::with_capacity(bytes.len() / POSTING_RECORD_SIZE);
    while !reader.is_exhausted() {
        let at = reader.position();
        let ordinal = reader.read_i32()?;
        let frequency = reader.read_i32()?;
        if ordinal < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Negative document ordinal {} at byte {}", ordinal, at),
            ));
        }
        if frequency < 1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Term frequency {} at byte {} is below 1", frequency, at),
            ));
        }
        postings.push(Posting::new(ordinal as u32, frequency as u32));
    }
    Ok(postings)
}

/// Seek to a term's range and read exactly `entry.count` records.
///
/// A range that runs past the end of the store surfaces as `UnexpectedEof`.
pub fn read_postings<R: Read + Seek>(reader: &mut R, entry: &TermEntry) -> io::Result<Vec<Posting>> {
    let len = (entry.count as usize)
        .checked_mul(POSTING_RECORD_SIZE)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "Posting range overflows"))?;

    reader.seek(SeekFrom::Start(entry.offset))?;
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "Posting range [{}, {}) runs past end of store",
                    entry.offset,
                    entry.end()
                ),
            )
        } else {
            e
        }
    })?;
    decode_postings(&buf)
}
