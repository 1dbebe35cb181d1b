//! Serialized artifacts.
//!
//! Three artifact kinds leave the codec: the packed bitstream (header
//! byte + payload bytes), the prefix code table (JSON, canonical order),
//! and the arithmetic payload (JSON, self-describing). File handles are
//! scoped to each call and released on every exit path.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bitstream;
use crate::code::CodeTable;
use crate::error::Result;
use crate::range32::ArithmeticPayload;

/// One serialized code table row: the raw symbol value and its codeword
/// rendered as a '0'/'1' string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeEntry {
    /// Byte value of the symbol.
    pub symbol: u8,
    /// Codeword as a '0'/'1' string.
    pub code: String,
}

/// Code table → serializable rows, canonical (length, symbol) order.
pub fn table_to_entries(table: &CodeTable) -> Vec<CodeEntry> {
    table
        .canonical_entries()
        .into_iter()
        .map(|(symbol, code)| CodeEntry {
            symbol,
            code: code
                .iter()
                .map(|&b| if b == 0 { '0' } else { '1' })
                .collect(),
        })
        .collect()
}

/// Serializable rows → code table.
pub fn entries_to_table(entries: &[CodeEntry]) -> CodeTable {
    let mut table = CodeTable::new();
    for entry in entries {
        let code = entry
            .code
            .chars()
            .map(|c| u8::from(c != '0'))
            .collect();
        table.insert(entry.symbol, code);
    }
    table
}

/// Write a bit sequence to a file in the padded storage format.
pub fn save_bitstream(bits: &[u8], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(&bitstream::to_stream(bits))?;
    writer.flush()?;
    Ok(())
}

/// Read a bit sequence back from a bitstream file.
///
/// An empty file yields an empty bit sequence.
pub fn load_bitstream(path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
    bitstream::from_stream(&bytes)
}

/// Write a code table artifact as JSON.
pub fn save_code_table(table: &CodeTable, path: &Path) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &table_to_entries(table))?;
    Ok(())
}

/// Read a code table artifact back from JSON.
pub fn load_code_table(path: &Path) -> Result<CodeTable> {
    let reader = BufReader::new(File::open(path)?);
    let entries: Vec<CodeEntry> = serde_json::from_reader(reader)?;
    Ok(entries_to_table(&entries))
}

/// Write an arithmetic payload artifact as JSON.
pub fn save_payload(payload: &ArithmeticPayload, path: &Path) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, payload)?;
    Ok(())
}

/// Read an arithmetic payload artifact back from JSON.
pub fn load_payload(path: &Path) -> Result<ArithmeticPayload> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use crate::{huffman, range32};

    #[test]
    fn test_code_table_entries_roundtrip() {
        let table = huffman::build_table(&FrequencyTable::count(b"AAAAABBBCC"));
        let entries = table_to_entries(&table);
        assert_eq!(entries[0].symbol, b'A');
        assert_eq!(entries[0].code, "0");
        assert_eq!(entries_to_table(&entries), table);
    }

    #[test]
    fn test_bitstream_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let bits = vec![1, 0, 1, 1, 0, 1, 0, 0, 1, 1, 1];
        save_bitstream(&bits, &path).unwrap();
        assert_eq!(load_bitstream(&path).unwrap(), bits);
    }

    #[test]
    fn test_empty_bitstream_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        std::fs::write(&path, b"").unwrap();
        assert!(load_bitstream(&path).unwrap().is_empty());
    }

    #[test]
    fn test_code_table_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code_table.json");
        let table = huffman::build_table(&FrequencyTable::count(b"mississippi"));
        save_code_table(&table, &path).unwrap();
        assert_eq!(load_code_table(&path).unwrap(), table);
    }

    #[test]
    fn test_payload_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        let payload = range32::encode(b"mississippi").unwrap();
        save_payload(&payload, &path).unwrap();
        let loaded = load_payload(&path).unwrap();
        assert_eq!(loaded, payload);
        assert_eq!(range32::decode(&loaded).unwrap(), b"mississippi");
    }
}
