#![no_main]
use libfuzzer_sys::fuzz_target;
use symcodec::{decode_with_table, encode_with_table, range32, Algorithm};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    for algorithm in [Algorithm::Huffman, Algorithm::ShannonFano] {
        let (bits, table) = encode_with_table(data, algorithm).unwrap();
        let decoded = decode_with_table(&bits, &table).unwrap();
        assert_eq!(data, decoded.as_slice());
    }

    let payload = range32::encode(data).unwrap();
    let decoded = range32::decode(&payload).unwrap();
    assert_eq!(data, decoded.as_slice());
});
