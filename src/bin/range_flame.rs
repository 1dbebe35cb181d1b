use symcodec::range32;

fn main() {
    let input: Vec<u8> = (0..10000)
        .map(|i| match i % 10 {
            0..=5 => b'A',
            6..=8 => b'B',
            _ => b'C',
        })
        .collect();

    for _ in 0..1000 {
        let payload = range32::encode(&input).unwrap();
        let decoded = range32::decode(&payload).unwrap();
        assert_eq!(decoded.len(), input.len());
    }
}
