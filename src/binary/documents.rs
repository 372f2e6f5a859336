// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document source file: `count:i32`, then `count` pairs of
//! (`id:string`, `text:string`).

use std::io;

use super::encoding::{encode_i32, encode_string, to_i32, ByteReader};

pub fn encode_documents<'a, I>(documents: I, count: usize, buf: &mut Vec<u8>) -> io::Result<()>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    encode_i32(to_i32(count, "document count")?, buf);
    let mut written = 0usize;
    for (id, text) in documents {
        encode_string(id, buf)?;
        encode_string(text, buf)?;
        written += 1;
    }
    if written != count {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Declared {} documents but wrote {}", count, written),
        ));
    }
    Ok(())
}

pub fn decode_documents(bytes: &[u8]) -> io::Result<Vec<(String, String)>> {
    let mut reader = ByteReader::new(bytes);
    let count = reader.read_count(2)?;
    let mut documents = Vec::with_capacity(count);
    for _ in 0..count {
        let id = reader.read_string()?;
        let text = reader.read_string()?;
        documents.push((id, text));
    }
    reader.expect_end()?;
    Ok(documents)
}
