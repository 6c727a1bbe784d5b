//! Static and voyage related data (message type 5)

use crate::consts::STATIC_VOYAGE_BITS;
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::messages::common::{Dimensions, Eta, PositionFixType};
use crate::validation::Violation;

/// Identity, dimensions and voyage details of a class A vessel
///
/// Usually spans two sentences.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticAndVoyageData {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// AIS version indicator
    pub ais_version: u8,
    /// IMO ship identification number
    pub imo_number: u32,
    /// Radio call sign
    pub call_sign: String,
    /// Vessel name
    pub vessel_name: String,
    /// Ship and cargo type code
    pub ship_type: u8,
    /// Reference point dimensions
    pub dimensions: Dimensions,
    /// Position fixing device
    pub fix_type: PositionFixType,
    /// Estimated time of arrival
    pub eta: Eta,
    /// Maximum present static draught in metres
    pub draught: f64,
    /// Destination
    pub destination: String,
    /// Data terminal not ready
    pub dte: bool,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl StaticAndVoyageData {
    /// Accepted payload length
    pub const LENGTH: LengthPolicy = LengthPolicy::Exact(STATIC_VOYAGE_BITS);

    /// Decode static and voyage data
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;

        Ok(StaticAndVoyageData {
            envelope,
            ais_version: bits.unsigned(38..=39)? as u8,
            imo_number: bits.unsigned(40..=69)? as u32,
            call_sign: bits.text(70..=111)?,
            vessel_name: bits.text(112..=231)?,
            ship_type: bits.unsigned(232..=239)? as u8,
            dimensions: Dimensions::read(bits, 240)?,
            fix_type: PositionFixType::from(bits.unsigned(270..=273)? as u8),
            eta: Eta {
                month: bits.unsigned(274..=277)? as u8,
                day: bits.unsigned(278..=282)? as u8,
                hour: bits.unsigned(283..=287)? as u8,
                minute: bits.unsigned(288..=293)? as u8,
            },
            destination: bits.text(294..=413)?,
            draught: bits.unsigned(414..=421)? as f64 / 10.0,
            dte: bits.boolean(422)?,
            violations: Vec::new(),
        })
    }
}
