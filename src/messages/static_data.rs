//! Static data report (message type 24)
//!
//! Class B units send their static data in two independent sentences. The
//! part number in bits 38-39 and the payload length select the layout:
//! - Part A, 160 bits: vessel name
//! - Part B, 168 bits: ship type, vendor, call sign and dimensions (or the
//!   mothership MMSI for auxiliary craft)

use crate::consts::{STATIC_DATA_PART_A_BITS, STATIC_DATA_PART_B_BITS};
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::{ParseError, Result};
use crate::messages::common::Dimensions;
use crate::validation::Violation;

/// MMSI prefix identifying auxiliary craft attached to a mothership
const AUXILIARY_CRAFT_PREFIX: u32 = 98;

/// Which half of the static data a report carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticDataPart {
    /// Part A: vessel name
    A,
    /// Part B: type, vendor, call sign, dimensions
    B,
}

/// Part B attachment: own dimensions, or the mothership for auxiliary craft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VesselReference {
    /// Reference point dimensions
    Dimensions(Dimensions),
    /// MMSI of the mothership
    Mothership(u32),
}

/// Fields of a part B report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticDataPartB {
    /// Ship and cargo type code
    pub ship_type: u8,
    /// Manufacturer mnemonic
    pub vendor_id: String,
    /// Unit model code
    pub unit_model: u8,
    /// Unit serial number
    pub serial_number: u32,
    /// Radio call sign
    pub call_sign: String,
    /// Dimensions or mothership
    pub reference: VesselReference,
}

/// Layout-specific content of a static data report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StaticDataContent {
    /// Part A
    PartA {
        /// Vessel name
        vessel_name: String,
    },
    /// Part B
    PartB(StaticDataPartB),
}

/// Class B static data report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticDataReport {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// Part A or part B fields
    pub content: StaticDataContent,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl StaticDataReport {
    /// Accepted payload length, covering both parts
    pub const LENGTH: LengthPolicy = LengthPolicy::Between {
        min: STATIC_DATA_PART_A_BITS,
        max: STATIC_DATA_PART_B_BITS,
    };

    /// Decode a static data report
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let part_number = bits.unsigned(38..=39)?;

        let content = match (part_number, bits.len()) {
            (0, STATIC_DATA_PART_A_BITS) => StaticDataContent::PartA {
                vessel_name: bits.text(40..=159)?,
            },
            (1, STATIC_DATA_PART_B_BITS) => {
                StaticDataContent::PartB(Self::decode_part_b(bits, envelope.source_id)?)
            }
            (part, len) => {
                return Err(ParseError::invalid_argument(format!(
                    "Unrecognized static data layout: part {} with {} bits",
                    part, len
                )))
            }
        };

        Ok(StaticDataReport {
            envelope,
            content,
            violations: Vec::new(),
        })
    }

    fn decode_part_b(bits: &BitSequence, source_id: u32) -> Result<StaticDataPartB> {
        let reference = if source_id / 10_000_000 == AUXILIARY_CRAFT_PREFIX {
            VesselReference::Mothership(bits.unsigned(132..=161)? as u32)
        } else {
            VesselReference::Dimensions(Dimensions::read(bits, 132)?)
        };

        Ok(StaticDataPartB {
            ship_type: bits.unsigned(40..=47)? as u8,
            vendor_id: bits.text(48..=65)?,
            unit_model: bits.unsigned(66..=69)? as u8,
            serial_number: bits.unsigned(70..=89)? as u32,
            call_sign: bits.text(90..=131)?,
            reference,
        })
    }

    /// Which part this report carries
    pub fn part(&self) -> StaticDataPart {
        match self.content {
            StaticDataContent::PartA { .. } => StaticDataPart::A,
            StaticDataContent::PartB(_) => StaticDataPart::B,
        }
    }
}
