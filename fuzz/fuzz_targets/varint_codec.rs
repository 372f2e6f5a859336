// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the 7-bit length prefix used by every string.

#![no_main]

use libfuzzer_sys::fuzz_target;
use quarry::binary::{decode_varint, encode_varint, MAX_VARINT_BYTES};

fuzz_target!(|data: &[u8]| {
    // Never panics; any successful decode re-encodes to a decodable prefix
    if let Ok((value, consumed)) = decode_varint(data) {
        assert!(consumed >= 1 && consumed <= MAX_VARINT_BYTES);
        assert!(consumed <= data.len());

        let mut reencoded = Vec::new();
        encode_varint(value, &mut reencoded);
        let (redecoded, reconsumed) =
            decode_varint(&reencoded).expect("re-encoded varint should decode");
        assert_eq!(value, redecoded);
        assert_eq!(reconsumed, reencoded.len());
    }
});
