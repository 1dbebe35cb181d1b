//! Shannon-Fano coding.
//!
//! Builds a prefix code by recursively splitting the symbol list, sorted
//! by descending frequency, into two groups of nearly equal weight. The
//! split point is chosen by a greedy scan that commits to the first
//! local minimum of the weight difference rather than searching
//! exhaustively; reproducing that scan exactly is what keeps tables
//! compatible across implementations.

use crate::code::CodeTable;
use crate::freq::FrequencyTable;

/// Build a Shannon-Fano code table for the given frequencies.
///
/// Symbols are ordered by descending frequency, ties broken by ascending
/// symbol value so that repeated runs produce identical tables. An empty
/// frequency table yields an empty code table; a single distinct symbol
/// gets the one-bit codeword `0`.
pub fn build_table(freqs: &FrequencyTable) -> CodeTable {
    let mut table = CodeTable::new();
    if freqs.is_empty() {
        return table;
    }

    let mut items = freqs.pairs();
    items.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    if items.len() == 1 {
        table.insert(items[0].0, vec![0]);
        return table;
    }

    let mut codes: Vec<Vec<u8>> = vec![Vec::new(); items.len()];
    partition(&items, &mut codes, 0, items.len());
    for ((symbol, _), code) in items.into_iter().zip(codes) {
        table.insert(symbol, code);
    }
    table
}

/// Recursive balanced partition over `items[start..end]`.
fn partition(items: &[(u8, u64)], codes: &mut [Vec<u8>], start: usize, end: usize) {
    if end - start <= 1 {
        return;
    }
    let total: u64 = items[start..end].iter().map(|&(_, f)| f).sum();

    // First local minimum of |remaining - running|: stop improving, stop
    // scanning. Not an exhaustive minimum search.
    let mut split = start + 1;
    let mut running = 0u64;
    let mut min_diff = total;
    for (i, &(_, f)) in items.iter().enumerate().take(end).skip(start) {
        running += f;
        let remaining = total - running;
        let diff = remaining.abs_diff(running);
        if diff < min_diff {
            min_diff = diff;
            split = i + 1;
        } else {
            break;
        }
    }

    for (i, code) in codes.iter_mut().enumerate().take(end).skip(start) {
        code.push(if i < split { 0 } else { 1 });
    }
    partition(items, codes, start, split);
    partition(items, codes, split, end);
}
