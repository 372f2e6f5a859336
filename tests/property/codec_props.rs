//! Robustness of the decoders against arbitrary bytes.

use proptest::prelude::*;
use quarry::binary::{
    decode_dictionary, decode_documents, decode_ordinal_table, decode_postings, decode_varint,
    encode_varint,
};

proptest! {
    #[test]
    fn prop_varint_round_trip(value in any::<u32>()) {
        let mut buf = Vec::new();
        encode_varint(value, &mut buf);
        prop_assert!(buf.len() <= 5);
        prop_assert_eq!(decode_varint(&buf).unwrap(), (value, buf.len()));
    }

    /// Decoders reject garbage with an error instead of panicking.
    #[test]
    fn prop_decoders_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode_varint(&bytes);
        let _ = decode_postings(&bytes);
        let _ = decode_dictionary(&bytes);
        let _ = decode_ordinal_table(&bytes);
        let _ = decode_documents(&bytes);
    }

    /// Any buffer that is not a whole number of records is rejected.
    #[test]
    fn prop_partial_records_rejected(len in 1usize..64) {
        prop_assume!(len % 8 != 0);
        let bytes = vec![1u8; len];
        prop_assert!(decode_postings(&bytes).is_err());
    }
}
