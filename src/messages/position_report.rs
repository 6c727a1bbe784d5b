//! Class A position reports (message types 1, 2 and 3)

use crate::consts::POSITION_REPORT_BITS;
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::messages::common::{
    read_signed, read_unsigned, ManeuverIndicator, NavigationStatus, RateOfTurn,
};
use crate::validation::{
    check_enumerated, Violation, COURSE, HEADING, LATITUDE, LONGITUDE, MANEUVER_INDICATOR,
    NAVIGATION_STATUS, SPEED,
};

/// Scheduled (1), assigned (2) or interrogated (3) class A position report
///
/// Layout after the envelope:
/// - Bits 38-41: Navigational status
/// - Bits 42-49: Rate of turn (signed)
/// - Bits 50-59: Speed over ground
/// - Bit 60: Position accuracy
/// - Bits 61-88: Longitude (signed)
/// - Bits 89-115: Latitude (signed)
/// - Bits 116-127: Course over ground
/// - Bits 128-136: True heading
/// - Bits 137-142: UTC second
/// - Bits 143-144: Maneuver indicator
/// - Bit 148: RAIM flag
/// - Bits 149-167: Radio status
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReport {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// Navigational status
    pub navigation_status: NavigationStatus,
    /// Rate of turn
    pub rate_of_turn: RateOfTurn,
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
    /// True heading in degrees
    pub true_heading: Option<u16>,
    /// UTC second of the report (60-63 carry special meanings)
    pub timestamp: u8,
    /// Special maneuver indicator
    pub maneuver_indicator: ManeuverIndicator,
    /// RAIM in use
    pub raim: bool,
    /// Radio status
    pub radio_status: u32,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl PositionReport {
    /// Accepted payload length
    pub const LENGTH: LengthPolicy = LengthPolicy::Exact(POSITION_REPORT_BITS);

    /// Decode a position report
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let mut violations = Vec::new();

        let status = bits.unsigned(38..=41)?;
        check_enumerated(
            "navigation_status",
            status as i64,
            NAVIGATION_STATUS,
            &mut violations,
        );

        let speed_over_ground = read_unsigned(bits, 50..=59, &SPEED, &mut violations)?;
        let longitude = read_signed(bits, 61..=88, &LONGITUDE, &mut violations)?;
        let latitude = read_signed(bits, 89..=115, &LATITUDE, &mut violations)?;
        let course_over_ground = read_unsigned(bits, 116..=127, &COURSE, &mut violations)?;
        let true_heading =
            read_unsigned(bits, 128..=136, &HEADING, &mut violations)?.map(|deg| deg as u16);

        let maneuver = bits.unsigned(143..=144)?;
        check_enumerated(
            "maneuver_indicator",
            maneuver as i64,
            MANEUVER_INDICATOR,
            &mut violations,
        );

        Ok(PositionReport {
            envelope,
            navigation_status: NavigationStatus::from(status as u8),
            rate_of_turn: RateOfTurn::from_raw(bits.signed(42..=49)?),
            speed_over_ground,
            position_accuracy: bits.boolean(60)?,
            longitude,
            latitude,
            course_over_ground,
            true_heading,
            timestamp: bits.unsigned(137..=142)? as u8,
            maneuver_indicator: ManeuverIndicator::from(maneuver as u8),
            raim: bits.boolean(148)?,
            radio_status: bits.unsigned(149..=167)? as u32,
            violations,
        })
    }
}
