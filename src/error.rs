//! Error types for the codec.

use thiserror::Error;

/// Error variants for encoding, decoding, and artifact I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// An algorithm name that the table-based encoder does not recognize.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// The operation is undefined over an empty symbol sequence.
    #[error("empty input")]
    EmptyInput,

    /// The total frequency exceeds the range coder's 32-bit working precision.
    #[error("total frequency {0} exceeds coder precision")]
    ModelOverflow(u64),

    /// A symbol in the input has no codeword in the supplied table.
    #[error("symbol {0:#04x} has no codeword in the table")]
    SymbolNotInTable(u8),

    /// A bitstream header declared more padding bits than fit in one byte.
    #[error("invalid padding count {0}, expected 0..=7")]
    InvalidPadding(u8),

    /// A serialized payload violates its own model invariants.
    #[error("corrupt payload: {0}")]
    CorruptPayload(&'static str),

    /// An I/O error occurred while reading or writing an artifact.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// An artifact could not be serialized or parsed as JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
