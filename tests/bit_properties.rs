//! Property tests for armor decoding and bit extraction.

use ais_parser::encoding::{ArmorDecoder, ArmorEncoder};
use ais_parser::BitSequence;
use proptest::prelude::*;

fn bits_of(value: u64, width: usize) -> BitSequence {
    BitSequence::from_bits((0..width).rev().map(|shift| (value >> shift) & 1 == 1))
}

proptest! {
    #[test]
    fn armor_characters_round_trip(value in 0u8..64) {
        let character = ArmorEncoder::encode_value(value).unwrap();
        prop_assert_eq!(ArmorDecoder::decode_char(character, 0).unwrap(), value);
    }

    #[test]
    fn armored_text_length_matches(values in proptest::collection::vec(0u8..64, 1..80), fill in 0u8..6) {
        let text: String = values
            .iter()
            .map(|value| ArmorEncoder::encode_value(*value).unwrap())
            .collect();
        let bits = BitSequence::decode(&text, fill).unwrap();
        prop_assert_eq!(bits.len(), values.len() * 6 - usize::from(fill));

        // Each whole character reads back as its six-bit value
        for (index, value) in values.iter().enumerate().take(bits.len() / 6) {
            let start = index * 6;
            prop_assert_eq!(bits.unsigned(start..=start + 5).unwrap(), u64::from(*value));
        }
    }

    #[test]
    fn unsigned_reads_back(value in any::<u32>(), width in 1usize..=32) {
        let masked = u64::from(value) & ((1u64 << width) - 1);
        let bits = bits_of(masked, width);
        prop_assert_eq!(bits.unsigned(0..=width - 1).unwrap(), masked);
    }

    #[test]
    fn signed_follows_twos_complement(
        width in prop_oneof![Just(8usize), Just(17), Just(18), Just(27), Just(28)],
        raw in any::<u32>(),
    ) {
        let raw = u64::from(raw) & ((1u64 << width) - 1);
        let expected = if raw >= 1u64 << (width - 1) {
            raw as i64 - (1i64 << width)
        } else {
            raw as i64
        };
        prop_assert_eq!(bits_of(raw, width).signed(0..=width - 1).unwrap(), expected);
    }

    #[test]
    fn reads_past_end_fail(len in 1usize..64, extra in 0usize..8) {
        let bits = BitSequence::from_bits(std::iter::repeat(true).take(len));
        prop_assert!(bits.unsigned(0..=len + extra).is_err());
        prop_assert!(bits.boolean(len + extra).is_err());
    }
}
