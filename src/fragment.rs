//! Reassembly of AIS payloads split across several transport sentences
//!
//! A logical message that does not fit one sentence is carried by fragments
//! numbered from 1. [`FragmentAssembler`] accepts them strictly in order and
//! keeps only the fill-bit count of the last fragment. How many fragments a
//! message has is known to the sentence layer, so completion is driven by
//! the caller through [`FragmentAssembler::finish`].

use crate::consts::MAX_FILL_BITS;
use crate::core::BitSequence;
use crate::error::{ParseError, Result};

/// One transport sentence's share of a logical AIS message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayloadFragment {
    /// 1-based position of this fragment within the message
    pub fragment_index: u32,
    /// Armored payload text
    pub text: String,
    /// Number of fill bits padding the final character (0-5)
    pub fill_bits: u8,
}

impl PayloadFragment {
    /// Create a new fragment
    pub fn new(fragment_index: u32, text: impl Into<String>, fill_bits: u8) -> Self {
        PayloadFragment {
            fragment_index,
            text: text.into(),
            fill_bits,
        }
    }
}

/// Armored text of a complete logical message
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssembledPayload {
    text: String,
    fill_bits: u8,
    fragment_count: u32,
}

impl AssembledPayload {
    /// Concatenated armored text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fill bits taken from the last fragment
    pub fn fill_bits(&self) -> u8 {
        self.fill_bits
    }

    /// Number of fragments that were joined
    pub fn fragment_count(&self) -> u32 {
        self.fragment_count
    }

    /// Decode the assembled text into a bit sequence
    pub fn to_bits(&self) -> Result<BitSequence> {
        BitSequence::decode(&self.text, self.fill_bits)
    }
}

/// Accumulates ordered fragments of one logical message.
///
/// One assembler serves exactly one message and is dropped afterwards.
#[derive(Debug, Clone, Default)]
pub struct FragmentAssembler {
    text: String,
    last_index: u32,
    fill_bits: u8,
}

impl FragmentAssembler {
    /// Create an empty assembler expecting fragment 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next fragment.
    ///
    /// The first fragment must carry index 1 and every following one the
    /// previous index plus one. A rejected fragment leaves the assembler
    /// unchanged.
    pub fn append(&mut self, payload: &str, fragment_index: u32, fill_bits: u8) -> Result<()> {
        if payload.is_empty() {
            return Err(ParseError::invalid_argument(format!(
                "Fragment {} has an empty payload",
                fragment_index
            )));
        }
        if fill_bits > MAX_FILL_BITS {
            return Err(ParseError::invalid_argument(format!(
                "Fill bits {} out of range [0, {}]",
                fill_bits, MAX_FILL_BITS
            )));
        }

        let expected = self.next_index();
        if fragment_index != expected {
            return Err(ParseError::sequence_error(expected, fragment_index));
        }

        self.text.push_str(payload);
        self.last_index = fragment_index;
        self.fill_bits = fill_bits;
        Ok(())
    }

    /// Append a fragment produced by the sentence layer
    pub fn push(&mut self, fragment: &PayloadFragment) -> Result<()> {
        self.append(&fragment.text, fragment.fragment_index, fragment.fill_bits)
    }

    /// Index the next fragment must carry
    pub fn next_index(&self) -> u32 {
        self.last_index.saturating_add(1)
    }

    /// Number of fragments accepted so far
    pub fn fragment_count(&self) -> u32 {
        self.last_index
    }

    /// Check if no fragment has been accepted yet
    pub fn is_empty(&self) -> bool {
        self.last_index == 0
    }

    /// Complete the message
    pub fn finish(self) -> Result<AssembledPayload> {
        if self.is_empty() {
            return Err(ParseError::invalid_argument(
                "No fragments to assemble".to_string(),
            ));
        }

        Ok(AssembledPayload {
            text: self.text,
            fill_bits: self.fill_bits,
            fragment_count: self.last_index,
        })
    }

    /// Assemble a complete, ordered run of fragments
    pub fn assemble(fragments: &[PayloadFragment]) -> Result<AssembledPayload> {
        let mut assembler = FragmentAssembler::new();
        for fragment in fragments {
            assembler.push(fragment)?;
        }
        assembler.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_fragments_assemble() -> Result<()> {
        let mut assembler = FragmentAssembler::new();
        assembler.append("55?M", 1, 0)?;
        assembler.append("bV02", 2, 0)?;
        assembler.append("88", 3, 2)?;

        let payload = assembler.finish()?;
        assert_eq!(payload.text(), "55?MbV0288");
        assert_eq!(payload.fill_bits(), 2);
        assert_eq!(payload.fragment_count(), 3);
        Ok(())
    }

    #[test]
    fn test_only_last_fill_bits_kept() -> Result<()> {
        let payload = FragmentAssembler::assemble(&[
            PayloadFragment::new(1, "1w", 4),
            PayloadFragment::new(2, "1w", 0),
        ])?;
        assert_eq!(payload.fill_bits(), 0);
        assert_eq!(payload.to_bits()?.len(), 24);
        Ok(())
    }

    #[test]
    fn test_gap_is_sequence_error() {
        let mut assembler = FragmentAssembler::new();
        assembler.append("1w", 1, 0).unwrap();
        let err = assembler.append("1w", 3, 0).unwrap_err();
        assert_eq!(err, ParseError::sequence_error(2, 3));
        // The rejected fragment did not disturb the assembler
        assert_eq!(assembler.next_index(), 2);
        assert!(assembler.append("1w", 2, 0).is_ok());
    }

    #[test]
    fn test_must_start_at_one() {
        let mut assembler = FragmentAssembler::new();
        assert_eq!(
            assembler.append("1w", 2, 0).unwrap_err(),
            ParseError::sequence_error(1, 2)
        );
        assert_eq!(
            assembler.append("1w", 0, 0).unwrap_err(),
            ParseError::sequence_error(1, 0)
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let mut assembler = FragmentAssembler::new();
        assert!(matches!(
            assembler.append("", 1, 0),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(matches!(
            assembler.append("1w", 1, 6),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(matches!(
            FragmentAssembler::new().finish(),
            Err(ParseError::InvalidArgument(_))
        ));
    }
}
