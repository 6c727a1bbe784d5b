//! Core bit sequence type for AIS payloads

use std::ops::RangeInclusive;

use crate::consts::{BITS_PER_CHAR, MAX_FILL_BITS};
use crate::encoding::ArmorDecoder;
use crate::error::{ParseError, Result};

/// Immutable, fixed-length sequence of bits decoded from an armored payload.
///
/// Bits are numbered from 0 at the most significant end, matching the bit
/// offsets used by the AIS message tables. Every read is checked against
/// [`len`](BitSequence::len).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "PackedBits"))]
pub struct BitSequence {
    /// Packed bits, MSB first
    packed: Vec<u8>,
    /// Number of valid bits after fill bits were dropped
    len: usize,
}

/// Unchecked serialized form of a [`BitSequence`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PackedBits {
    packed: Vec<u8>,
    len: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<PackedBits> for BitSequence {
    type Error = ParseError;

    fn try_from(bits: PackedBits) -> Result<Self> {
        let capacity = bits.packed.len().saturating_mul(8);
        if bits.len > capacity {
            return Err(ParseError::invalid_argument(format!(
                "Bit length {} exceeds {} packed bits",
                bits.len, capacity
            )));
        }
        Ok(BitSequence {
            packed: bits.packed,
            len: bits.len,
        })
    }
}

impl BitSequence {
    /// Decode an armored payload, dropping the trailing `fill_bits`.
    pub fn decode(armored: &str, fill_bits: u8) -> Result<Self> {
        if fill_bits > MAX_FILL_BITS {
            return Err(ParseError::invalid_argument(format!(
                "Fill bits {} out of range [0, {}]",
                fill_bits, MAX_FILL_BITS
            )));
        }

        let (packed, total) = ArmorDecoder::decode_payload(armored)?;
        let fill = usize::from(fill_bits);
        if fill > total {
            return Err(ParseError::invalid_argument(format!(
                "Fill bits {} exceed payload of {} bits",
                fill, total
            )));
        }

        Ok(BitSequence {
            packed,
            len: total - fill,
        })
    }

    /// Build a sequence directly from bits, MSB first.
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut packed = Vec::new();
        let mut len = 0usize;
        for bit in bits {
            if len % 8 == 0 {
                packed.push(0);
            }
            if bit {
                packed[len / 8] |= 0x80 >> (len % 8);
            }
            len += 1;
        }
        BitSequence { packed, len }
    }

    /// Number of bits in the sequence
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the sequence holds no bits
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of whole six-bit characters the sequence spans
    pub fn char_len(&self) -> usize {
        self.len / BITS_PER_CHAR
    }

    fn check_range(&self, range: &RangeInclusive<usize>) -> Result<()> {
        let (start, end) = (*range.start(), *range.end());
        if start > end || end >= self.len {
            return Err(ParseError::out_of_range(start, end, self.len));
        }
        Ok(())
    }

    fn bit_unchecked(&self, index: usize) -> bool {
        (self.packed[index / 8] >> (7 - index % 8)) & 1 != 0
    }

    /// Read a single bit
    pub fn boolean(&self, index: usize) -> Result<bool> {
        self.check_range(&(index..=index))?;
        Ok(self.bit_unchecked(index))
    }

    /// Read an unsigned integer over an inclusive bit range, MSB first.
    ///
    /// The range may span at most 64 bits.
    pub fn unsigned(&self, range: RangeInclusive<usize>) -> Result<u64> {
        self.check_range(&range)?;
        let width = range.end() - range.start() + 1;
        if width > 64 {
            return Err(ParseError::invalid_argument(format!(
                "Cannot read {} bits into a 64-bit integer",
                width
            )));
        }

        Ok(range.fold(0u64, |acc, index| {
            (acc << 1) | u64::from(self.bit_unchecked(index))
        }))
    }

    /// Read a two's-complement integer whose width equals the range length.
    pub fn signed(&self, range: RangeInclusive<usize>) -> Result<i64> {
        let width = range.end().saturating_sub(*range.start()) + 1;
        self.signed_width(range, width)
    }

    /// Read an integer over `range` and reinterpret it as two's complement of
    /// `width` bits: values at or above `2^(width-1)` map to `value - 2^width`.
    pub fn signed_width(&self, range: RangeInclusive<usize>, width: usize) -> Result<i64> {
        if width == 0 || width > 64 {
            return Err(ParseError::invalid_argument(format!(
                "Signed width {} out of range [1, 64]",
                width
            )));
        }

        let raw = self.unsigned(range)?;
        if width == 64 {
            return Ok(raw as i64);
        }

        let raw = raw & ((1u64 << width) - 1);
        if raw >= 1u64 << (width - 1) {
            Ok(raw as i64 - (1i64 << width))
        } else {
            Ok(raw as i64)
        }
    }

    /// Read six-bit text over an inclusive range.
    ///
    /// Values below 32 map to `@`..=`_`, the rest map to themselves. Trailing
    /// `@` padding and spaces are trimmed. A trailing partial group shorter
    /// than six bits is ignored.
    pub fn text(&self, range: RangeInclusive<usize>) -> Result<String> {
        self.check_range(&range)?;
        let (start, end) = (*range.start(), *range.end());
        let chars = (end - start + 1) / BITS_PER_CHAR;

        let mut text = String::with_capacity(chars);
        for index in 0..chars {
            let offset = start + index * BITS_PER_CHAR;
            let value = self.unsigned(offset..=offset + BITS_PER_CHAR - 1)? as u8;
            text.push(sixbit_ascii(value));
        }

        let trimmed = text.trim_end_matches(['@', ' ']).len();
        text.truncate(trimmed);
        Ok(text)
    }
}

/// Map a six-bit value onto the AIS text alphabet
fn sixbit_ascii(value: u8) -> char {
    if value < 32 {
        char::from(value + 64)
    } else {
        char::from(value)
    }
}

impl std::fmt::Display for BitSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for index in 0..self.len {
            f.write_str(if self.bit_unchecked(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(pattern: &str) -> BitSequence {
        BitSequence::from_bits(pattern.chars().map(|c| c == '1'))
    }

    #[test]
    fn test_decode_truncates_fill_bits() {
        let seq = BitSequence::decode("1w", 2).unwrap();
        assert_eq!(seq.len(), 10);
        assert_eq!(seq.to_string(), "0000011111");
    }

    #[test]
    fn test_decode_rejects_excess_fill() {
        assert!(matches!(
            BitSequence::decode("1w", 6),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(matches!(
            BitSequence::decode("", 3),
            Err(ParseError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unsigned_read() {
        let seq = bits("0001011011");
        assert_eq!(seq.unsigned(0..=5).unwrap(), 5);
        assert_eq!(seq.unsigned(6..=9).unwrap(), 0b1011);
        assert_eq!(seq.unsigned(9..=9).unwrap(), 1);
    }

    #[test]
    fn test_reads_past_end_fail() {
        let seq = bits("0001");
        assert_eq!(
            seq.unsigned(2..=4).unwrap_err(),
            ParseError::OutOfRange {
                start: 2,
                end: 4,
                len: 4
            }
        );
        assert!(seq.boolean(4).is_err());
        assert!(seq.text(0..=5).is_err());
    }

    #[test]
    fn test_signed_width_8_boundaries() {
        assert_eq!(bits("10000000").signed(0..=7).unwrap(), -128);
        assert_eq!(bits("01111111").signed(0..=7).unwrap(), 127);
        assert_eq!(bits("11111111").signed(0..=7).unwrap(), -1);
        assert_eq!(bits("00000000").signed(0..=7).unwrap(), 0);
    }

    #[test]
    fn test_signed_wide_boundaries() {
        for width in [17usize, 18, 27, 28] {
            let min = std::iter::once(true).chain(std::iter::repeat(false).take(width - 1));
            let max = std::iter::once(false).chain(std::iter::repeat(true).take(width - 1));
            assert_eq!(
                BitSequence::from_bits(min).signed(0..=width - 1).unwrap(),
                -(1i64 << (width - 1))
            );
            assert_eq!(
                BitSequence::from_bits(max).signed(0..=width - 1).unwrap(),
                (1i64 << (width - 1)) - 1
            );
        }
    }

    #[test]
    fn test_signed_width_narrower_than_range() {
        // Only the low `width` bits take part in the sign
        assert_eq!(bits("00001111").signed_width(0..=7, 4).unwrap(), -1);
        assert!(bits("0000").signed_width(0..=3, 0).is_err());
    }

    #[test]
    fn test_text_trims_padding() {
        // "AB" followed by '@' padding and a space
        let seq = bits("000001000010000000100000");
        assert_eq!(seq.text(0..=23).unwrap(), "AB");
        // Interior '@' survives, trailing partial group is ignored
        let seq = bits("000001000000000010111");
        assert_eq!(seq.text(0..=20).unwrap(), "A@B");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_short_buffer() {
        let err = serde_json::from_str::<BitSequence>(r#"{"packed":[0],"len":100}"#);
        assert!(err.is_err());

        let seq: BitSequence = serde_json::from_str(r#"{"packed":[5],"len":8}"#).unwrap();
        assert_eq!(seq.unsigned(0..=7).unwrap(), 5);
        assert!(seq.unsigned(0..=8).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_sequence_reads_back() {
        let seq = BitSequence::decode("13u?etPv2;0n:dDPwUM1U1Cb069D", 0).unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(serde_json::from_str::<BitSequence>(&json).unwrap(), seq);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let a = BitSequence::decode("13u?etPv2;0n:dDPwUM1U1Cb069D", 0).unwrap();
        let b = BitSequence::decode("13u?etPv2;0n:dDPwUM1U1Cb069D", 0).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 168);
        assert_eq!(a.char_len(), 28);
    }
}
