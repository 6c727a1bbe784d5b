//! Envelope fields and length policy shared by every AIS message
//!
//! Every message starts with the same 38-bit header:
//! - Bits 0-5: Message type
//! - Bits 6-7: Repeat indicator
//! - Bits 8-37: Source MMSI

use bitfield::bitfield;

use crate::consts::ENVELOPE_BITS;
use crate::core::BitSequence;
use crate::error::{ParseError, Result};

bitfield! {
    /// The 38-bit header right-aligned in a `u64`
    struct EnvelopeHeader(u64);
    u8;
    message_type, _: 37, 32;
    repeat_indicator, _: 31, 30;
    u32, source_id, _: 29, 0;
}

/// Fields every AIS message carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageEnvelope {
    /// Message type (0-63)
    pub message_type: u8,
    /// Number of times the message has been repeated (0-3)
    pub repeat_indicator: u8,
    /// MMSI of the transmitting station
    pub source_id: u32,
}

impl MessageEnvelope {
    /// Read the envelope without checking the message length
    pub fn peek(bits: &BitSequence) -> Result<Self> {
        let header = EnvelopeHeader(bits.unsigned(0..=ENVELOPE_BITS - 1)?);
        Ok(MessageEnvelope {
            message_type: header.message_type(),
            repeat_indicator: header.repeat_indicator(),
            source_id: header.source_id(),
        })
    }
}

/// Accepted bit lengths for a message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthPolicy {
    /// Exactly this many bits
    Exact(usize),
    /// Any length in `min..=max`
    Between {
        /// Shortest accepted length
        min: usize,
        /// Longest accepted length
        max: usize,
    },
}

impl LengthPolicy {
    /// Check if `len` satisfies the policy
    pub fn accepts(&self, len: usize) -> bool {
        match *self {
            LengthPolicy::Exact(expected) => len == expected,
            LengthPolicy::Between { min, max } => (min..=max).contains(&len),
        }
    }
}

impl std::fmt::Display for LengthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LengthPolicy::Exact(expected) => write!(f, "{}", expected),
            LengthPolicy::Between { min, max } => write!(f, "{}..={}", min, max),
        }
    }
}

/// Check the message length against `policy`, then read the envelope.
///
/// Every decoder calls this before reading any type-specific field.
pub fn decode_envelope(bits: &BitSequence, policy: LengthPolicy) -> Result<MessageEnvelope> {
    if !policy.accepts(bits.len()) {
        // The type may be unreadable on a truncated payload
        let message_type = bits.unsigned(0..=5).map(|raw| raw as u8).unwrap_or(0);
        return Err(ParseError::length_mismatch(
            message_type,
            policy.to_string(),
            bits.len(),
        ));
    }
    MessageEnvelope::peek(bits)
}
