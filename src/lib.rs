//! # Static-model symbol-stream entropy coding
//!
//! *Three interchangeable coders over one frozen frequency model.*
//!
//! ## Intuition First
//!
//! Every coder here answers the same question: given how often each byte
//! occurs, how few bits can represent the whole sequence? Prefix codes
//! (Shannon-Fano, Huffman) answer with a fixed codeword per symbol —
//! frequent symbols get short codewords, and the prefix-free property
//! makes the concatenation self-delimiting. The range coder drops the
//! whole-bit-per-symbol restriction: the entire message becomes a single
//! sub-interval of the 32-bit number line, narrowed once per symbol, so
//! a symbol can effectively cost a fraction of a bit.
//!
//! ## The Model
//!
//! All three coders are *static*: the frequency table is built in one
//! pass over the complete input and never adapts. For the prefix paths
//! the code table is persisted next to the bitstream; for the arithmetic
//! path the model travels inside a self-describing payload. Decoding
//! never reconstructs a model from partial output.
//!
//! ```text
//! 1948  Shannon   entropy as the compression limit
//! 1949  Fano      balanced-partition prefix codes
//! 1952  Huffman   optimal greedy-merge prefix codes
//! 1976  Rissanen  arithmetic coding reaches the limit
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! bytes -> FrequencyTable -> {shannon_fano | huffman} -> CodeTable
//!       -> codeword concatenation -> bit sequence -> padded bytes
//!
//! bytes -> FrequencyTable -> range32 -> ArithmeticPayload
//! ```
//!
//! ## Example
//!
//! ```
//! use symcodec::{encode_with_table, decode_with_table, Algorithm};
//!
//! let data = b"AAAAABBBCC";
//! let (bits, table) = encode_with_table(data, Algorithm::Huffman).unwrap();
//! assert_eq!(decode_with_table(&bits, &table).unwrap(), data);
//! ```
//!
//! ## Failure Modes
//!
//! 1. **Empty input**: coders return empty tables and bit sequences;
//!    metrics refuse the undefined zero-symbol formulas.
//! 2. **Oversized model**: the range coder rejects totals beyond its
//!    32-bit working precision instead of silently overflowing.
//! 3. **Truncated bitstreams**: table-based decoding drops trailing bits
//!    that never complete a codeword, mirroring the pad bits the writer
//!    appends.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitstream;
pub mod code;
pub mod error;
pub mod format;
pub mod freq;
pub mod huffman;
pub mod metrics;
pub mod range32;
pub mod shannon_fano;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use code::CodeTable;
pub use error::{Error, Result};
pub use freq::{CumulativeModel, FrequencyTable};
pub use metrics::CodeMetrics;
pub use range32::ArithmeticPayload;

/// Coding strategy tag, also stored in serialized artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Algorithm {
    /// Greedy-merge prefix coding.
    Huffman,
    /// Balanced-partition prefix coding.
    #[serde(rename = "Shannon-Fano")]
    ShannonFano,
    /// 32-bit static-model range coding.
    #[serde(rename = "ArithmeticRange32")]
    Range32,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Huffman => "Huffman",
            Algorithm::ShannonFano => "Shannon-Fano",
            Algorithm::Range32 => "ArithmeticRange32",
        })
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Huffman" => Ok(Algorithm::Huffman),
            "Shannon-Fano" => Ok(Algorithm::ShannonFano),
            "ArithmeticRange32" => Ok(Algorithm::Range32),
            other => Err(Error::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

/// Count occurrences of each distinct byte in `data`.
pub fn build_frequency(data: &[u8]) -> FrequencyTable {
    FrequencyTable::count(data)
}

/// Encode `data` with a prefix code built from its own frequencies.
///
/// Returns the bit sequence and the code table needed to decode it.
/// Only the two table-based algorithms are valid here; the arithmetic
/// tag fails with [`Error::UnsupportedAlgorithm`] since its artifact
/// carries no separate table.
pub fn encode_with_table(data: &[u8], algorithm: Algorithm) -> Result<(Vec<u8>, CodeTable)> {
    let freqs = FrequencyTable::count(data);
    let table = match algorithm {
        Algorithm::Huffman => huffman::build_table(&freqs),
        Algorithm::ShannonFano => shannon_fano::build_table(&freqs),
        Algorithm::Range32 => {
            return Err(Error::UnsupportedAlgorithm(algorithm.to_string()));
        }
    };
    let bits = code::encode_symbols(data, &table)?;
    Ok((bits, table))
}

/// Decode a bit sequence with the code table it was encoded under.
pub fn decode_with_table(bits: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    Ok(code::decode_symbols(bits, table))
}
