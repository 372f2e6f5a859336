// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term dictionary: `count:i32`, then per term `term:string`,
//! `byte_offset:i64`, `posting_count:i32`.
//!
//! Entries are written in byte-wise lexicographic term order. The decoder
//! keeps file order and leaves ordering checks to the verifier, because the
//! query engine only needs point lookups.

use std::io;

use super::encoding::{encode_i32, encode_i64, encode_string, to_i32, to_i64, ByteReader};
use crate::types::TermEntry;

/// Smallest possible entry: empty term (1-byte prefix) + i64 + i32.
const MIN_ENTRY_SIZE: usize = 1 + 8 + 4;

pub fn encode_dictionary(entries: &[(String, TermEntry)], buf: &mut Vec<u8>) -> io::Result<()> {
    encode_i32(to_i32(entries.len(), "term count")?, buf);
    for (term, entry) in entries {
        encode_string(term, buf)?;
        encode_i64(to_i64(entry.offset, "posting offset")?, buf);
        encode_i32(to_i32(entry.count as usize, "posting count")?, buf);
    }
    Ok(())
}

pub fn decode_dictionary(bytes: &[u8]) -> io::Result<Vec<(String, TermEntry)>> {
    let mut reader = ByteReader::new(bytes);
    let count = reader.read_count(MIN_ENTRY_SIZE)?;

    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let term = reader.read_string()?;
        let offset = reader.read_i64()?;
        let posting_count = reader.read_i32()?;
        if offset < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Term {} ({:?}) has negative offset {}", i, term, offset),
            ));
        }
        // Every term in the dictionary occurs in at least one document
        if posting_count < 1 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Term {} ({:?}) has posting count {}",
                    i, term, posting_count
                ),
            ));
        }
        entries.push((
            term,
            TermEntry {
                offset: offset as u64,
                count: posting_count as u32,
            },
        ));
    }
    reader.expect_end()?;

    Ok(entries)
}
