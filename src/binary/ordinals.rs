// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document ordinal table: `count:i32`, then `count` identifiers in ordinal
//! order. Position in the table is the ordinal.

use std::io;

use super::encoding::{encode_i32, encode_string, to_i32, ByteReader};

pub fn encode_ordinal_table<S: AsRef<str>>(identifiers: &[S], buf: &mut Vec<u8>) -> io::Result<()> {
    encode_i32(to_i32(identifiers.len(), "document count")?, buf);
    for id in identifiers {
        encode_string(id.as_ref(), buf)?;
    }
    Ok(())
}

pub fn decode_ordinal_table(bytes: &[u8]) -> io::Result<Vec<String>> {
    let mut reader = ByteReader::new(bytes);
    let count = reader.read_count(1)?;
    let mut identifiers = Vec::with_capacity(count);
    for _ in 0..count {
        identifiers.push(reader.read_string()?);
    }
    reader.expect_end()?;
    Ok(identifiers)
}
