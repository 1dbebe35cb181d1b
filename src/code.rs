//! Prefix code tables and bit packing.
//!
//! A [`CodeTable`] maps byte values to variable-length codewords. Both
//! prefix coders guarantee the table is prefix-free, which is what lets
//! [`decode_symbols`] run greedily with no lookahead.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Symbol → codeword mapping produced by the prefix coders.
///
/// Codewords are stored as bit vectors (one 0/1 value per element).
/// Iteration for serialization uses canonical order: codeword length
/// first, then symbol value. The bit patterns themselves are whatever
/// the coder assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    // 256 slots indexed by symbol; empty vec = symbol absent.
    codes: Vec<Vec<u8>>,
}

impl CodeTable {
    /// An empty table with no codewords assigned.
    pub fn new() -> Self {
        Self {
            codes: vec![Vec::new(); 256],
        }
    }

    /// Assign a codeword to a symbol, replacing any previous one.
    pub fn insert(&mut self, symbol: u8, code: Vec<u8>) {
        self.codes[symbol as usize] = code;
    }

    /// Codeword for a symbol, if assigned.
    pub fn get(&self, symbol: u8) -> Option<&[u8]> {
        let code = &self.codes[symbol as usize];
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    /// Number of symbols with a codeword.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| !c.is_empty()).count()
    }

    /// True if no symbol has a codeword.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|c| c.is_empty())
    }

    /// Entries in canonical order: codeword length, then symbol value.
    pub fn canonical_entries(&self) -> Vec<(u8, Vec<u8>)> {
        let mut entries: Vec<(u8, Vec<u8>)> = self
            .codes
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(|(s, c)| (s as u8, c.clone()))
            .collect();
        entries.sort_by_key(|(s, c)| (c.len(), *s));
        entries
    }
}

/// Concatenate each input symbol's codeword, in input order.
///
/// Every symbol must have a codeword; a miss means the table was not
/// built from this input's frequencies and is surfaced as
/// [`Error::SymbolNotInTable`].
pub fn encode_symbols(data: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    let mut bits = Vec::new();
    for &s in data {
        let code = table.get(s).ok_or(Error::SymbolNotInTable(s))?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Greedy prefix-match decode of a bit sequence against a code table.
///
/// Bits are accumulated until the buffer equals some codeword, which is
/// then emitted. Trailing bits that never complete a codeword are
/// dropped silently, matching the bitstream writer's pad bits.
pub fn decode_symbols(bits: &[u8], table: &CodeTable) -> Vec<u8> {
    let reverse: HashMap<&[u8], u8> = table
        .codes
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_empty())
        .map(|(s, c)| (c.as_slice(), s as u8))
        .collect();

    let mut out = Vec::new();
    let mut buffer = Vec::new();
    for &bit in bits {
        buffer.push(bit);
        if let Some(&symbol) = reverse.get(buffer.as_slice()) {
            out.push(symbol);
            buffer.clear();
        }
    }
    out
}

/// True if no codeword is a proper prefix of another.
pub fn is_prefix_free(table: &CodeTable) -> bool {
    let entries = table.canonical_entries();
    for (i, (_, a)) in entries.iter().enumerate() {
        for (_, b) in &entries[i + 1..] {
            // canonical order sorts by length, so a is never longer than b
            if b.len() > a.len() && &b[..a.len()] == a.as_slice() {
                return false;
            }
            if a == b {
                return false;
            }
        }
    }
    true
}
