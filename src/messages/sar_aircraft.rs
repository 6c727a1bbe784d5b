//! Standard SAR aircraft position report (message type 9)

use crate::consts::SAR_AIRCRAFT_BITS;
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::messages::common::{read_signed, read_unsigned};
use crate::validation::{Violation, ALTITUDE, COURSE, LATITUDE, LONGITUDE, SPEED_SAR};

/// Position report of a search-and-rescue aircraft
///
/// Speed is in whole knots, unlike the tenths used by vessel reports.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SarAircraftPositionReport {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// Altitude in metres (4094 means 4094 or higher)
    pub altitude: Option<u16>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f64>,
    /// High (< 10 m) position accuracy
    pub position_accuracy: bool,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Course over ground in degrees
    pub course_over_ground: Option<f64>,
    /// UTC second of the report
    pub timestamp: u8,
    /// Regional reserved bits
    pub regional: u8,
    /// Data terminal not ready
    pub dte: bool,
    /// Assigned mode
    pub assigned: bool,
    /// RAIM in use
    pub raim: bool,
    /// Radio status
    pub radio_status: u32,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl SarAircraftPositionReport {
    /// Accepted payload length
    pub const LENGTH: LengthPolicy = LengthPolicy::Exact(SAR_AIRCRAFT_BITS);

    /// Decode a SAR aircraft position report
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let mut violations = Vec::new();

        let altitude =
            read_unsigned(bits, 38..=49, &ALTITUDE, &mut violations)?.map(|metres| metres as u16);
        let speed_over_ground = read_unsigned(bits, 50..=59, &SPEED_SAR, &mut violations)?;
        let longitude = read_signed(bits, 61..=88, &LONGITUDE, &mut violations)?;
        let latitude = read_signed(bits, 89..=115, &LATITUDE, &mut violations)?;
        let course_over_ground = read_unsigned(bits, 116..=127, &COURSE, &mut violations)?;

        Ok(SarAircraftPositionReport {
            envelope,
            altitude,
            speed_over_ground,
            position_accuracy: bits.boolean(60)?,
            longitude,
            latitude,
            course_over_ground,
            timestamp: bits.unsigned(128..=133)? as u8,
            regional: bits.unsigned(134..=141)? as u8,
            dte: bits.boolean(142)?,
            assigned: bits.boolean(146)?,
            raim: bits.boolean(147)?,
            radio_status: bits.unsigned(148..=167)? as u32,
            violations,
        })
    }
}
