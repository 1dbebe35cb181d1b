//! Huffman coding.
//!
//! Classic greedy construction: repeatedly merge the two lowest-weight
//! entries of a priority queue until one remains. Rather than building
//! an explicit tree, each queue entry carries its subtree's (symbol,
//! code) pairs directly; merging prepends a bit to every code on each
//! side, so the final surviving entry is the finished table.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::code::CodeTable;
use crate::freq::FrequencyTable;

/// A priority-queue entry: one subtree's accumulated weight and codes.
///
/// Equal-weight entries pop in insertion order (`seq`): leaves are
/// seeded in ascending symbol order, merged entries are numbered after
/// all leaves. This total order is what makes tables reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    weight: u64,
    seq: u64,
    pairs: Vec<(u8, Vec<u8>)>,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-priority queue: lowest weight first, then lowest seq.
        other
            .weight
            .cmp(&self.weight)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build a Huffman code table for the given frequencies.
///
/// An empty frequency table yields an empty code table; a single
/// distinct symbol gets the one-bit codeword `0`.
pub fn build_table(freqs: &FrequencyTable) -> CodeTable {
    let mut table = CodeTable::new();
    if freqs.is_empty() {
        return table;
    }

    let mut pq = BinaryHeap::new();
    let mut seq = 0u64;
    for (symbol, weight) in freqs.pairs() {
        pq.push(Entry {
            weight,
            seq,
            pairs: vec![(symbol, Vec::new())],
        });
        seq += 1;
    }

    while pq.len() > 1 {
        let mut lo = pq.pop().unwrap();
        let mut hi = pq.pop().unwrap();
        for (_, code) in &mut lo.pairs {
            code.insert(0, 0);
        }
        for (_, code) in &mut hi.pairs {
            code.insert(0, 1);
        }
        let mut pairs = lo.pairs;
        pairs.extend(hi.pairs);
        pq.push(Entry {
            weight: lo.weight + hi.weight,
            seq,
            pairs,
        });
        seq += 1;
    }

    for (symbol, code) in pq.pop().unwrap().pairs {
        // A lone root leaf never went through a merge; promote its empty
        // code to a single bit so it can round-trip.
        table.insert(symbol, if code.is_empty() { vec![0] } else { code });
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{decode_symbols, encode_symbols, is_prefix_free};

    #[test]
    fn test_skewed_frequencies_get_short_codes() {
        // A=5 gets one bit; B=3 and C=2 get two bits each.
        let table = build_table(&FrequencyTable::count(b"AAAAABBBCC"));
        assert_eq!(table.get(b'A').unwrap().len(), 1);
        assert_eq!(table.get(b'B').unwrap().len(), 2);
        assert_eq!(table.get(b'C').unwrap().len(), 2);
    }

    #[test]
    fn test_roundtrip() {
        let data = b"abracadabra abracadabra";
        let table = build_table(&FrequencyTable::count(data));
        assert!(is_prefix_free(&table));
        let bits = encode_symbols(data, &table).unwrap();
        assert_eq!(decode_symbols(&bits, &table), data);
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        assert!(build_table(&FrequencyTable::count(b"")).is_empty());
    }

    #[test]
    fn test_single_symbol_gets_one_bit() {
        let table = build_table(&FrequencyTable::count(b"zzz"));
        assert_eq!(table.get(b'z'), Some(&[0u8][..]));
        let bits = encode_symbols(b"zzz", &table).unwrap();
        assert_eq!(decode_symbols(&bits, &table), b"zzz");
    }

    #[test]
    fn test_deterministic_under_equal_weights() {
        // Four symbols, all weight 2: construction order is fixed by the
        // (weight, seq) total order, so repeated builds agree exactly.
        let data = b"aabbccdd";
        let t1 = build_table(&FrequencyTable::count(data));
        let t2 = build_table(&FrequencyTable::count(data));
        assert_eq!(t1.canonical_entries(), t2.canonical_entries());
        for (_, code) in t1.canonical_entries() {
            assert_eq!(code.len(), 2);
        }
    }
}
