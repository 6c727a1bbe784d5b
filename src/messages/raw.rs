//! Opaque messages kept as bits

use crate::core::BitSequence;
use crate::envelope::MessageEnvelope;
use crate::error::Result;
use crate::validation::Violation;

/// A message whose body is not decoded
///
/// Produced by [`RawDecoder`](crate::registry::RawDecoder) for message types
/// the caller wants to accept without a dedicated layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMessage {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// The complete payload, envelope included
    pub bits: BitSequence,
    /// Always empty; kept for a uniform message shape
    pub violations: Vec<Violation>,
}

impl RawMessage {
    /// Keep the payload after reading its envelope
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        Ok(RawMessage {
            envelope: MessageEnvelope::peek(bits)?,
            bits: bits.clone(),
            violations: Vec::new(),
        })
    }

    /// Bits following the 38-bit envelope
    pub fn body_len(&self) -> usize {
        self.bits.len().saturating_sub(crate::consts::ENVELOPE_BITS)
    }
}
