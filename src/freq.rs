//! Static frequency model.
//!
//! Both prefix coders and the range coder work from a single frequency
//! table built in one pass over the whole input. The model is never
//! updated after construction.

use crate::error::{Error, Result};

/// Occurrence counts per byte value.
///
/// Dense 256-slot table; a zero count means the symbol never occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
    total: u64,
}

impl FrequencyTable {
    /// Count every byte of `data`, including whitespace and control values.
    pub fn count(data: &[u8]) -> Self {
        let mut counts = vec![0u64; 256];
        for &b in data {
            counts[b as usize] += 1;
        }
        Self {
            counts,
            total: data.len() as u64,
        }
    }

    /// Rebuild a table from `(symbol, count)` pairs, e.g. out of a payload.
    pub fn from_pairs(pairs: &[(u8, u64)]) -> Self {
        let mut counts = vec![0u64; 256];
        let mut total = 0;
        for &(s, f) in pairs {
            counts[s as usize] = f;
            total += f;
        }
        Self { counts, total }
    }

    /// Count for one symbol.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts; equals the input length.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// True if no symbol was ever observed.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Observed symbols with their counts, in ascending symbol order.
    pub fn pairs(&self) -> Vec<(u8, u64)> {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &f)| f > 0)
            .map(|(s, &f)| (s as u8, f))
            .collect()
    }

    /// Number of distinct symbols observed.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&f| f > 0).count()
    }
}

/// Cumulative counts under ascending symbol order.
///
/// Invariants: `cum` is monotonic non-decreasing and
/// `cum[last] + freq[last] == total`.
#[derive(Debug, Clone)]
pub struct CumulativeModel {
    symbols: Vec<u8>,
    freqs: Vec<u64>,
    cums: Vec<u64>,
    total: u64,
}

impl CumulativeModel {
    /// Prefix sums over a frequency table, symbols ascending.
    pub fn from_table(table: &FrequencyTable) -> Self {
        let mut symbols = Vec::new();
        let mut freqs = Vec::new();
        let mut cums = Vec::new();
        let mut running = 0u64;
        for (s, f) in table.pairs() {
            symbols.push(s);
            freqs.push(f);
            cums.push(running);
            running += f;
        }
        Self {
            symbols,
            freqs,
            cums,
            total: running,
        }
    }

    /// Reassemble a model from payload pair lists, checking its invariants.
    pub fn from_pairs(freqs: &[(u8, u64)], cums: &[(u8, u64)], total: u64) -> Result<Self> {
        if freqs.len() != cums.len() {
            return Err(Error::CorruptPayload("frequency/cumulative length mismatch"));
        }
        let mut model = Self {
            symbols: Vec::with_capacity(freqs.len()),
            freqs: Vec::with_capacity(freqs.len()),
            cums: Vec::with_capacity(freqs.len()),
            total,
        };
        let mut running = 0u64;
        for (&(fs, f), &(cs, c)) in freqs.iter().zip(cums) {
            if fs != cs {
                return Err(Error::CorruptPayload("frequency/cumulative symbol mismatch"));
            }
            if let Some(&prev) = model.symbols.last() {
                if fs <= prev {
                    return Err(Error::CorruptPayload("symbols not in ascending order"));
                }
            }
            if c != running || f == 0 {
                return Err(Error::CorruptPayload("cumulative counts are not prefix sums"));
            }
            running += f;
            model.symbols.push(fs);
            model.freqs.push(f);
            model.cums.push(c);
        }
        if running != total {
            return Err(Error::CorruptPayload("counts do not sum to total"));
        }
        Ok(model)
    }

    /// Interval `[cum, cum + freq)` for the i-th symbol.
    pub fn interval(&self, i: usize) -> (u64, u64) {
        (self.cums[i], self.cums[i] + self.freqs[i])
    }

    /// Interval for a symbol value, if it is in the model.
    pub fn interval_of(&self, symbol: u8) -> Option<(u64, u64)> {
        let i = self.symbols.binary_search(&symbol).ok()?;
        Some(self.interval(i))
    }

    /// Symbol whose cumulative interval contains `scaled`.
    ///
    /// Intervals are disjoint and cover `[0, total)`, so the ascending
    /// scan finds exactly one owner for any in-range value.
    pub fn find(&self, scaled: u64) -> Option<u8> {
        for i in 0..self.symbols.len() {
            let (lo, hi) = self.interval(i);
            if lo <= scaled && scaled < hi {
                return Some(self.symbols[i]);
            }
        }
        None
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `(symbol, count)` pairs, ascending.
    pub fn freq_pairs(&self) -> Vec<(u8, u64)> {
        self.symbols.iter().copied().zip(self.freqs.iter().copied()).collect()
    }

    /// `(symbol, cumulative count)` pairs, ascending.
    pub fn cum_pairs(&self) -> Vec<(u8, u64)> {
        self.symbols.iter().copied().zip(self.cums.iter().copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_cover_every_byte_class() {
        let table = FrequencyTable::count(b"a b\na\0b");
        assert_eq!(table.get(b'a'), 2);
        assert_eq!(table.get(b'b'), 2);
        assert_eq!(table.get(b' '), 1);
        assert_eq!(table.get(b'\n'), 1);
        assert_eq!(table.get(0), 1);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_empty_input_yields_empty_table() {
        let table = FrequencyTable::count(b"");
        assert!(table.is_empty());
        assert!(table.pairs().is_empty());
    }

    #[test]
    fn test_cumulative_invariant() {
        let table = FrequencyTable::count(b"AAAAABBBCC");
        let model = CumulativeModel::from_table(&table);
        assert_eq!(model.total(), 10);
        assert_eq!(model.interval_of(b'A'), Some((0, 5)));
        assert_eq!(model.interval_of(b'B'), Some((5, 8)));
        assert_eq!(model.interval_of(b'C'), Some((8, 10)));
        // cum[last] + freq[last] == total
        let (lo, hi) = model.interval(2);
        assert_eq!(lo, 8);
        assert_eq!(hi, model.total());
    }

    #[test]
    fn test_from_pairs_rejects_broken_prefix_sums() {
        let freqs = vec![(b'a', 2u64), (b'b', 3u64)];
        let bad_cums = vec![(b'a', 0u64), (b'b', 1u64)];
        assert!(CumulativeModel::from_pairs(&freqs, &bad_cums, 5).is_err());
        let good_cums = vec![(b'a', 0u64), (b'b', 2u64)];
        assert!(CumulativeModel::from_pairs(&freqs, &good_cums, 5).is_ok());
        assert!(CumulativeModel::from_pairs(&freqs, &good_cums, 6).is_err());
    }

    #[test]
    fn test_find_owner() {
        let table = FrequencyTable::count(b"AAAAABBBCC");
        let model = CumulativeModel::from_table(&table);
        assert_eq!(model.find(0), Some(b'A'));
        assert_eq!(model.find(4), Some(b'A'));
        assert_eq!(model.find(5), Some(b'B'));
        assert_eq!(model.find(9), Some(b'C'));
        assert_eq!(model.find(10), None);
    }
}
