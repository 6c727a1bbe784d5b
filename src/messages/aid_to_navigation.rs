//! Aid-to-navigation report (message type 21)

use crate::consts::{AID_TO_NAVIGATION_MAX_BITS, AID_TO_NAVIGATION_MIN_BITS, BITS_PER_CHAR};
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::messages::common::{read_signed, Dimensions, PositionFixType};
use crate::validation::{Violation, LATITUDE, LONGITUDE};

/// Kind of aid to navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AidType {
    /// Not specified (default)
    NotSpecified,
    /// Reference point
    ReferencePoint,
    /// RACON
    Racon,
    /// Fixed structure off shore
    FixedStructure,
    /// Reserved code
    Reserved,
    /// Fixed aid: lights, leading lights and fixed beacons (5-19)
    Fixed(u8),
    /// Floating aid: buoys and light vessels (20-31)
    Floating(u8),
}

impl From<u8> for AidType {
    fn from(value: u8) -> Self {
        match value {
            0 => AidType::NotSpecified,
            1 => AidType::ReferencePoint,
            2 => AidType::Racon,
            3 => AidType::FixedStructure,
            5..=19 => AidType::Fixed(value),
            20..=31 => AidType::Floating(value),
            _ => AidType::Reserved,
        }
    }
}

/// Identification and position of an aid to navigation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AidToNavigationReport {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// Kind of aid
    pub aid_type: AidType,
    /// Name, including the extension when present
    pub name: String,
    /// High (< 10 m) position accuracy
    pub position_accuracy: bool,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Reference point dimensions
    pub dimensions: Dimensions,
    /// Position fixing device
    pub fix_type: PositionFixType,
    /// UTC second of the report
    pub timestamp: u8,
    /// Floating aid is off its charted position
    pub off_position: bool,
    /// Regional reserved bits
    pub regional: u8,
    /// RAIM in use
    pub raim: bool,
    /// Virtual aid (no physical station)
    pub virtual_aid: bool,
    /// Assigned mode
    pub assigned: bool,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl AidToNavigationReport {
    /// Accepted payload length; the name extension is optional
    pub const LENGTH: LengthPolicy = LengthPolicy::Between {
        min: AID_TO_NAVIGATION_MIN_BITS,
        max: AID_TO_NAVIGATION_MAX_BITS,
    };

    /// Decode an aid-to-navigation report
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let mut violations = Vec::new();

        let longitude = read_signed(bits, 164..=191, &LONGITUDE, &mut violations)?;
        let latitude = read_signed(bits, 192..=218, &LATITUDE, &mut violations)?;

        let mut name = bits.text(43..=162)?;
        let extension_bits = bits.len() - AID_TO_NAVIGATION_MIN_BITS;
        if extension_bits >= BITS_PER_CHAR {
            let start = AID_TO_NAVIGATION_MIN_BITS;
            name.push_str(&bits.text(start..=bits.len() - 1)?);
        }

        Ok(AidToNavigationReport {
            envelope,
            aid_type: AidType::from(bits.unsigned(38..=42)? as u8),
            name,
            position_accuracy: bits.boolean(163)?,
            longitude,
            latitude,
            dimensions: Dimensions::read(bits, 219)?,
            fix_type: PositionFixType::from(bits.unsigned(249..=252)? as u8),
            timestamp: bits.unsigned(253..=258)? as u8,
            off_position: bits.boolean(259)?,
            regional: bits.unsigned(260..=267)? as u8,
            raim: bits.boolean(268)?,
            virtual_aid: bits.boolean(269)?,
            assigned: bits.boolean(270)?,
            violations,
        })
    }
}
