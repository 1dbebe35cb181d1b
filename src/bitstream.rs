//! Byte alignment for bit sequences.
//!
//! Storage format: one header byte holding the pad count (0..=7),
//! followed by the bits packed MSB-first into bytes, the tail padded
//! with zeros up to a byte boundary.

use crate::error::{Error, Result};

/// Pack a bit sequence into bytes, MSB-first within each byte.
///
/// Returns the packed bytes and the number of zero pad bits appended.
pub fn pack_bits(bits: &[u8]) -> (Vec<u8>, u8) {
    let padding = ((8 - bits.len() % 8) % 8) as u8;
    let mut bytes = Vec::with_capacity(bits.len() / 8 + 1);
    let mut acc = 0u8;
    let mut filled = 0u8;
    for &bit in bits {
        acc = (acc << 1) | (bit & 1);
        filled += 1;
        if filled == 8 {
            bytes.push(acc);
            acc = 0;
            filled = 0;
        }
    }
    if filled > 0 {
        bytes.push(acc << (8 - filled));
    }
    (bytes, padding)
}

/// Expand packed bytes back into a bit sequence, dropping `padding`
/// trailing bits.
pub fn unpack_bits(bytes: &[u8], padding: u8) -> Result<Vec<u8>> {
    if padding > 7 {
        return Err(Error::InvalidPadding(padding));
    }
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits.truncate(bits.len().saturating_sub(padding as usize));
    Ok(bits)
}

/// Serialize a bit sequence into the storage format: pad-count header
/// byte, then the packed payload.
pub fn to_stream(bits: &[u8]) -> Vec<u8> {
    let (packed, padding) = pack_bits(bits);
    let mut out = Vec::with_capacity(packed.len() + 1);
    out.push(padding);
    out.extend_from_slice(&packed);
    out
}

/// Parse the storage format back into a bit sequence.
///
/// An empty input (no header byte at all) yields an empty sequence.
pub fn from_stream(bytes: &[u8]) -> Result<Vec<u8>> {
    match bytes.split_first() {
        None => Ok(Vec::new()),
        Some((&padding, rest)) => unpack_bits(rest, padding),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_is_msb_first() {
        let (bytes, padding) = pack_bits(&[1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(bytes, vec![0b1011_0001]);
        assert_eq!(padding, 0);
    }

    #[test]
    fn test_partial_byte_pads_with_zeros() {
        let (bytes, padding) = pack_bits(&[1, 1, 0]);
        assert_eq!(bytes, vec![0b1100_0000]);
        assert_eq!(padding, 5);
    }

    #[test]
    fn test_roundtrip_every_length_mod_8() {
        for len in 0..=24 {
            let bits: Vec<u8> = (0..len).map(|i| (i % 3 == 0) as u8).collect();
            let stream = to_stream(&bits);
            assert!(stream[0] <= 7);
            assert_eq!(from_stream(&stream).unwrap(), bits);
        }
    }

    #[test]
    fn test_empty_stream_is_empty_bits() {
        assert!(from_stream(&[]).unwrap().is_empty());
        assert_eq!(to_stream(&[]), vec![0]);
    }

    #[test]
    fn test_invalid_padding_header() {
        assert!(matches!(
            from_stream(&[8, 0xff]),
            Err(Error::InvalidPadding(8))
        ));
    }
}
