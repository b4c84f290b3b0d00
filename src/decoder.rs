//! Bitstream to text decoding.
//!
//! The data line is grouped into bytes of eight samples, most significant bit
//! first. A trailing group shorter than eight samples is dropped, not padded.

use std::fmt;

/// Bits per decoded character
pub const BITS_PER_BYTE: usize = 8;

/// Emitted for byte values outside printable ASCII
pub const PLACEHOLDER: char = '?';

/// Text recovered from a data line, one character per complete byte
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodedText {
    text: String,
    bytes: Vec<u8>,
}

impl DecodedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Raw byte values, one per character of [`as_str`](Self::as_str)
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of decoded characters
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes as space separated upper-case hex, e.g. `48 49`
    pub fn to_hex(&self) -> String {
        self.bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for DecodedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Assemble eight levels into a byte, first element as MSB.
/// Any non-zero level counts as a set bit.
fn assemble_byte(group: &[u8]) -> u8 {
    group
        .iter()
        .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit != 0))
}

/// Map a byte value to its printable ASCII character or [`PLACEHOLDER`]
pub fn byte_to_char(value: u8) -> char {
    if (32..=126).contains(&value) {
        char::from(value)
    } else {
        PLACEHOLDER
    }
}

/// Decode a bit sequence into text
pub fn decode(bits: &[u8]) -> DecodedText {
    let bytes: Vec<u8> = bits.chunks_exact(BITS_PER_BYTE).map(assemble_byte).collect();
    let text = bytes.iter().copied().map(byte_to_char).collect();

    DecodedText { text, bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expand a byte into its eight bits, MSB first
    fn bits_of(value: u8) -> Vec<u8> {
        (0..8).rev().map(|shift| (value >> shift) & 1).collect()
    }

    #[test]
    fn test_decode_msb_first() {
        let decoded = decode(&[0, 1, 0, 0, 0, 0, 0, 1]);
        assert_eq!(decoded.as_str(), "A");
        assert_eq!(decoded.bytes(), &[0x41]);
    }

    #[test]
    fn test_decode_non_printable() {
        assert_eq!(decode(&[0, 0, 0, 0, 0, 0, 0, 1]).as_str(), "?");
        assert_eq!(decode(&bits_of(127)).as_str(), "?");
        assert_eq!(decode(&bits_of(255)).as_str(), "?");
        assert_eq!(decode(&bits_of(31)).as_str(), "?");

        // Edges of the printable range
        assert_eq!(decode(&bits_of(32)).as_str(), " ");
        assert_eq!(decode(&bits_of(126)).as_str(), "~");
    }

    #[test]
    fn test_decode_empty() {
        let decoded = decode(&[]);
        assert_eq!(decoded.as_str(), "");
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_truncates_partial_group() {
        let mut bits = bits_of(b'H');
        bits.extend(bits_of(b'I'));
        let whole = decode(&bits);

        for extra in 1..8 {
            let mut padded = bits.clone();
            padded.extend(std::iter::repeat(1).take(extra));
            assert_eq!(decode(&padded), whole);
            assert_eq!(decode(&padded).len(), 2);
        }

        // Fewer than eight bits decode to nothing
        assert_eq!(decode(&[1, 1, 1]).as_str(), "");
    }

    #[test]
    fn test_decode_hi() {
        let bits = [0, 1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1];
        let decoded = decode(&bits);
        assert_eq!(decoded.as_str(), "HI");
        assert_eq!(decoded.to_hex(), "48 49");
        assert_eq!(decoded.to_string(), "HI");
    }

    #[test]
    fn test_byte_to_char() {
        assert_eq!(byte_to_char(b'a'), 'a');
        assert_eq!(byte_to_char(0), PLACEHOLDER);
        assert_eq!(byte_to_char(b'\n'), PLACEHOLDER);
    }
}
