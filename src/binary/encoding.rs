// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary encoding primitives: fixed-width integers and length-prefixed strings.
//!
//! Integers are little-endian two's complement. Strings are UTF-8 bytes
//! prefixed by their length as a 7-bit-group varint, the same layout a .NET
//! `BinaryWriter` produces, so artifacts written by other tools stay readable.
//!
//! # References
//!
//! - **Varint (LEB128)**: Little-endian base-128 variable-length integer encoding.
//!   See: DWARF4 specification §7.6 "Variable Length Data", and
//!   Google Protocol Buffers encoding: <https://protobuf.dev/programming-guides/encoding/>

use std::fmt;
use std::io;

/// A 32-bit length never needs more than 5 varint bytes.
pub const MAX_VARINT_BYTES: usize = 5;

// ============================================================================
// VARINT ENCODING
// ============================================================================

/// Encode a varint to bytes
pub fn encode_varint(mut value: u32, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        } else {
            buf.push(byte | 0x80);
        }
    }
}

/// Decode a varint from bytes, returning (value, bytes_consumed)
///
/// Returns an error if:
/// - Buffer is empty or ends mid-varint
/// - Varint exceeds MAX_VARINT_BYTES or overflows 32 bits
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u32, usize)> {
    if bytes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Empty buffer for varint",
        ));
    }

    let mut result: u64 = 0;
    let mut shift = 0;
    let mut i = 0;

    while i < bytes.len() && i < MAX_VARINT_BYTES {
        let byte = bytes[i];
        result |= u64::from(byte & 0x7F) << shift;
        i += 1;
        if byte & 0x80 == 0 {
            return u32::try_from(result).map(|v| (v, i)).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidData, "Varint overflows 32 bits")
            });
        }
        shift += 7;
    }

    if i >= MAX_VARINT_BYTES {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Incomplete varint",
        ))
    }
}

// ============================================================================
// FIXED-WIDTH INTEGERS AND STRINGS
// ============================================================================

/// A value too large for its fixed-width field.
///
/// Carried inside the `InvalidInput` error an encoder returns, so callers can
/// recover the field name and bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOverflow {
    pub what: &'static str,
    pub value: u64,
    pub max: u64,
}

impl fmt::Display for FieldOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} does not fit in {}", self.what, self.value, field_name(self.max))
    }
}

impl std::error::Error for FieldOverflow {}

impl From<FieldOverflow> for io::Error {
    fn from(overflow: FieldOverflow) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, overflow)
    }
}

fn field_name(max: u64) -> &'static str {
    if max == i32::MAX as u64 {
        "int32"
    } else {
        "int64"
    }
}

/// Convert a count or length to the `i32` the format stores it as.
pub fn to_i32(value: usize, what: &'static str) -> io::Result<i32> {
    i32::try_from(value).map_err(|_| {
        FieldOverflow {
            what,
            value: value as u64,
            max: i32::MAX as u64,
        }
        .into()
    })
}

/// Convert an offset to the `i64` the format stores it as.
pub fn to_i64(value: u64, what: &'static str) -> io::Result<i64> {
    i64::try_from(value).map_err(|_| {
        FieldOverflow {
            what,
            value,
            max: i64::MAX as u64,
        }
        .into()
    })
}

pub fn encode_i32(value: i32, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn encode_i64(value: i64, buf: &mut Vec<u8>) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Encode a varint length prefix followed by the UTF-8 bytes.
pub fn encode_string(value: &str, buf: &mut Vec<u8>) -> io::Result<()> {
    let len = to_i32(value.len(), "string length")?;
    encode_varint(len as u32, buf);
    buf.extend_from_slice(value.as_bytes());
    Ok(())
}

// ============================================================================
// BYTE READER
// ============================================================================

/// Bounds-checked cursor over an artifact's bytes.
///
/// Every read either returns a complete value or an error; nothing is ever
/// partially consumed on failure.
#[derive(Debug)]
pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn take(&mut self, len: usize, what: &str) -> io::Result<&'a [u8]> {
        let end = self.pos.checked_add(len).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} length {} causes overflow", what, len),
            )
        })?;
        if end > self.bytes.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "Truncated {} at byte {} (need {} bytes, {} left)",
                    what,
                    self.pos,
                    len,
                    self.remaining()
                ),
            ));
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    pub fn read_i32(&mut self) -> io::Result<i32> {
        let raw = self.take(4, "int32")?;
        Ok(i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    pub fn read_i64(&mut self) -> io::Result<i64> {
        let raw = self.take(8, "int64")?;
        let mut le = [0u8; 8];
        le.copy_from_slice(raw);
        Ok(i64::from_le_bytes(le))
    }

    pub fn read_string(&mut self) -> io::Result<String> {
        let start = self.pos;
        let (len, consumed) = decode_varint(&self.bytes[self.pos..])?;
        self.pos += consumed;
        let raw = match self.take(len as usize, "string") {
            Ok(raw) => raw,
            Err(e) => {
                self.pos = start;
                return Err(e);
            }
        };
        String::from_utf8(raw.to_vec()).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid UTF-8 in string at byte {}: {}", start, e),
            )
        })
    }

    /// Read an `int32` entry count and check it against the bytes left.
    ///
    /// Each entry needs at least `min_entry_size` bytes, so a count that
    /// cannot possibly fit is rejected before anything is allocated.
    pub fn read_count(&mut self, min_entry_size: usize) -> io::Result<usize> {
        let count = self.read_i32()?;
        if count < 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Negative entry count {}", count),
            ));
        }
        let count = count as usize;
        let max_entries = self.remaining() / min_entry_size.max(1);
        if count > max_entries {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "Entry count {} exceeds available bytes {}",
                    count,
                    self.remaining()
                ),
            ));
        }
        Ok(count)
    }

    /// Fail if anything follows the declared entries.
    pub fn expect_end(&self) -> io::Result<()> {
        if self.is_exhausted() {
            Ok(())
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{} trailing bytes after last entry at byte {}",
                    self.remaining(),
                    self.pos
                ),
            ))
        }
    }
}
