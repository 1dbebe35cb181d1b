//! Compression metrics.
//!
//! Source entropy, achieved average code length, and the ratio between
//! the two. Entropy depends only on the frequency distribution; average
//! length depends on the code actually chosen.

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;

/// Metrics for one encoded sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeMetrics {
    /// Source entropy in bits per symbol: `-sum(p * log2 p)`.
    pub entropy: f64,
    /// Achieved average code length in bits per symbol.
    pub average_length: f64,
    /// `entropy / average_length * 100`; 0 when the average is 0.
    pub efficiency: f64,
}

fn entropy(freqs: &FrequencyTable) -> f64 {
    let total = freqs.total() as f64;
    freqs
        .pairs()
        .iter()
        .map(|&(_, f)| {
            let p = f as f64 / total;
            -p * p.log2()
        })
        .sum()
}

fn with_average(freqs: &FrequencyTable, average_length: f64) -> CodeMetrics {
    let entropy = entropy(freqs);
    let efficiency = if average_length > 0.0 {
        entropy / average_length * 100.0
    } else {
        0.0
    };
    CodeMetrics {
        entropy,
        average_length,
        efficiency,
    }
}

/// Metrics for a prefix code: average length is `sum(p * len(code))`.
///
/// Fails with [`Error::EmptyInput`] on a zero-total table, where the
/// formulas are undefined, and [`Error::SymbolNotInTable`] if the table
/// does not cover the distribution.
pub fn for_table(freqs: &FrequencyTable, table: &CodeTable) -> Result<CodeMetrics> {
    if freqs.is_empty() {
        return Err(Error::EmptyInput);
    }
    let total = freqs.total() as f64;
    let mut average_length = 0.0;
    for (symbol, f) in freqs.pairs() {
        let code = table.get(symbol).ok_or(Error::SymbolNotInTable(symbol))?;
        average_length += f as f64 / total * code.len() as f64;
    }
    Ok(with_average(freqs, average_length))
}

/// Theoretical bit cost of range-coding `data`: `sum(-log2 p)` over the
/// actual sequence, plus a fixed 2-bit flush/terminator overhead,
/// rounded up to whole bits.
pub fn range32_bit_count(data: &[u8]) -> Result<u64> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    let freqs = FrequencyTable::count(data);
    let total = freqs.total() as f64;
    let mut bits = 0.0;
    for &s in data {
        let p = freqs.get(s) as f64 / total;
        bits -= p.log2();
    }
    Ok((bits + 2.0).ceil() as u64)
}

/// Metrics for the arithmetic path, from the theoretical bit count.
pub fn for_range32(data: &[u8]) -> Result<CodeMetrics> {
    let bits = range32_bit_count(data)?;
    let freqs = FrequencyTable::count(data);
    Ok(with_average(&freqs, bits as f64 / data.len() as f64))
}
