use proptest::prelude::*;
use symcodec::code::is_prefix_free;
use symcodec::{
    bitstream, decode_with_table, encode_with_table, metrics, range32, Algorithm, FrequencyTable,
};

proptest! {
    #[test]
    fn prop_huffman_roundtrip(data in prop::collection::vec(any::<u8>(), 1..400)) {
        let (bits, table) = encode_with_table(&data, Algorithm::Huffman).unwrap();
        prop_assert!(is_prefix_free(&table));
        prop_assert_eq!(decode_with_table(&bits, &table).unwrap(), data);
    }

    #[test]
    fn prop_shannon_fano_roundtrip(data in prop::collection::vec(any::<u8>(), 1..400)) {
        let (bits, table) = encode_with_table(&data, Algorithm::ShannonFano).unwrap();
        prop_assert!(is_prefix_free(&table));
        prop_assert_eq!(decode_with_table(&bits, &table).unwrap(), data);
    }

    #[test]
    fn prop_range32_roundtrip(data in prop::collection::vec(any::<u8>(), 1..400)) {
        let payload = range32::encode(&data).unwrap();
        prop_assert_eq!(payload.length as usize, data.len());
        prop_assert_eq!(payload.total as usize, data.len());
        prop_assert_eq!(range32::decode(&payload).unwrap(), data);
    }

    #[test]
    fn prop_frequency_conservation(data in prop::collection::vec(any::<u8>(), 0..400)) {
        let freqs = FrequencyTable::count(&data);
        let sum: u64 = freqs.pairs().iter().map(|&(_, f)| f).sum();
        prop_assert_eq!(sum as usize, data.len());
        prop_assert_eq!(freqs.total() as usize, data.len());
    }

    #[test]
    fn prop_prefix_code_respects_entropy_bound(
        data in prop::collection::vec(any::<u8>(), 2..400),
    ) {
        let freqs = FrequencyTable::count(&data);
        for algorithm in [Algorithm::Huffman, Algorithm::ShannonFano] {
            let (_, table) = encode_with_table(&data, algorithm).unwrap();
            let m = metrics::for_table(&freqs, &table).unwrap();
            // Kraft: no valid prefix code beats the source entropy.
            prop_assert!(m.average_length + 1e-9 >= m.entropy);
        }
    }

    #[test]
    fn prop_padding_roundtrip(bits in prop::collection::vec(0u8..2, 0..300)) {
        let stream = bitstream::to_stream(&bits);
        prop_assert!(stream[0] <= 7);
        prop_assert_eq!(bitstream::from_stream(&stream).unwrap(), bits);
    }

    #[test]
    fn prop_deterministic_tables(data in prop::collection::vec(any::<u8>(), 1..200)) {
        for algorithm in [Algorithm::Huffman, Algorithm::ShannonFano] {
            let (bits_a, table_a) = encode_with_table(&data, algorithm).unwrap();
            let (bits_b, table_b) = encode_with_table(&data, algorithm).unwrap();
            prop_assert_eq!(bits_a, bits_b);
            prop_assert_eq!(table_a.canonical_entries(), table_b.canonical_entries());
        }
        let a = range32::encode(&data).unwrap();
        let b = range32::encode(&data).unwrap();
        prop_assert_eq!(a, b);
    }
}
