//! Six-bit ASCII armor used by AIS payloads
//!
//! Each armored character carries six bits. Character codes 48..=87 (`0`..=`W`)
//! map to 0..=39 and codes 96..=119 (`` ` ``..=`w`) map to 40..=63.

use crate::consts::{ARMOR_HIGH, ARMOR_LOW, BITS_PER_CHAR};
use crate::error::{ParseError, Result};

/// Six-bit armor decoder
pub struct ArmorDecoder;

impl ArmorDecoder {
    /// Decode a single armored character into its six-bit value
    ///
    /// `position` is only used to build the error.
    pub fn decode_char(character: char, position: usize) -> Result<u8> {
        let code = character as u32;
        if ARMOR_LOW.contains(&code) {
            Ok((code - 48) as u8)
        } else if ARMOR_HIGH.contains(&code) {
            Ok((code - 56) as u8)
        } else {
            Err(ParseError::InvalidArmor {
                character,
                position,
            })
        }
    }

    /// Decode an armored payload into packed bytes, MSB first.
    ///
    /// Returns the packed buffer and the number of meaningful bits, before
    /// any fill bits are dropped.
    pub fn decode_payload(armored: &str) -> Result<(Vec<u8>, usize)> {
        let total_bits = armored.chars().count() * BITS_PER_CHAR;
        let mut packed = vec![0u8; total_bits.div_ceil(8)];
        let mut bit_pos = 0usize;

        for (position, character) in armored.chars().enumerate() {
            let value = Self::decode_char(character, position)?;
            for shift in (0..BITS_PER_CHAR).rev() {
                if (value >> shift) & 1 != 0 {
                    packed[bit_pos / 8] |= 0x80 >> (bit_pos % 8);
                }
                bit_pos += 1;
            }
        }

        Ok((packed, total_bits))
    }
}

/// Six-bit armor encoder
///
/// Maps values back onto the armor alphabet. Used to check the character
/// table, not to build outbound messages.
pub struct ArmorEncoder;

impl ArmorEncoder {
    /// Encode a six-bit value (0..=63) as an armor character
    pub fn encode_value(value: u8) -> Result<char> {
        match value {
            0..=39 => Ok(char::from(value + 48)),
            40..=63 => Ok(char::from(value + 56)),
            _ => Err(ParseError::invalid_argument(format!(
                "Six-bit value {} out of range [0, 63]",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_char_bounds() {
        assert_eq!(ArmorDecoder::decode_char('0', 0).unwrap(), 0);
        assert_eq!(ArmorDecoder::decode_char('W', 0).unwrap(), 39);
        assert_eq!(ArmorDecoder::decode_char('`', 0).unwrap(), 40);
        assert_eq!(ArmorDecoder::decode_char('w', 0).unwrap(), 63);
    }

    #[test]
    fn test_decode_char_rejects_gap() {
        // 'X' (88) through '_' (95) sit between the two armor ranges
        for character in ['X', 'Y', 'Z', '[', '\\', ']', '^', '_', 'x', '/', ' '] {
            let err = ArmorDecoder::decode_char(character, 7).unwrap_err();
            assert_eq!(
                err,
                ParseError::InvalidArmor {
                    character,
                    position: 7
                }
            );
        }
    }

    #[test]
    fn test_armor_roundtrip_every_value() {
        for value in 0u8..64 {
            let character = ArmorEncoder::encode_value(value).unwrap();
            assert_eq!(ArmorDecoder::decode_char(character, 0).unwrap(), value);
        }
        assert!(ArmorEncoder::encode_value(64).is_err());
    }

    #[test]
    fn test_decode_payload_packs_msb_first() {
        // '1' = 000001, 'w' = 111111
        let (packed, bits) = ArmorDecoder::decode_payload("1w").unwrap();
        assert_eq!(bits, 12);
        assert_eq!(packed, vec![0b0000_0111, 0b1111_0000]);
    }

    #[test]
    fn test_decode_payload_reports_position() {
        let err = ArmorDecoder::decode_payload("13u?e!").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidArmor {
                character: '!',
                position: 5
            }
        );
    }
}
