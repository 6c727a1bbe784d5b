//! Class B position reports (message types 18 and 19)

use crate::consts::{EXTENDED_CLASS_B_BITS, STANDARD_CLASS_B_BITS};
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::messages::common::{read_signed, read_unsigned, Dimensions, PositionFixType};
use crate::validation::{Violation, COURSE, HEADING, LATITUDE, LONGITUDE, SPEED};

/// Kinematic fields at the same offsets in types 18 and 19
struct ClassBKinematics {
    speed_over_ground: Option<f64>,
    position_accuracy: bool,
    longitude: Option<f64>,
    latitude: Option<f64>,
    course_over_ground: Option<f64>,
    true_heading: Option<u16>,
    timestamp: u8,
}

impl ClassBKinematics {
    fn read(bits: &BitSequence, violations: &mut Vec<Violation>) -> Result<Self> {
        Ok(ClassBKinematics {
            speed_over_ground: read_unsigned(bits, 46..=55, &SPEED, violations)?,
            position_accuracy: bits.boolean(56)?,
            longitude: read_signed(bits, 57..=84, &LONGITUDE, violations)?,
            latitude: read_signed(bits, 85..=111, &LATITUDE, violations)?,
            course_over_ground: read_unsigned(bits, 112..=123, &COURSE, violations)?,
            true_heading: read_unsigned(bits, 124..=132, &HEADING, violations)?
                .map(|deg| deg as u16),
            timestamp: bits.unsigned(133..=138)? as u8,
        })
    }
}

/// Standard class B equipment position report (type 18)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StandardClassBPositionReport {
    /// Shared envelope
    pub envelope: MessageEnvelope,
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
    /// UTC second of the report
    pub timestamp: u8,
    /// Carrier-sense (true) or SOTDMA (false) unit
    pub cs_unit: bool,
    /// Unit has an integrated display
    pub display: bool,
    /// Unit has DSC
    pub dsc: bool,
    /// Unit can use the whole marine band
    pub band: bool,
    /// Unit accepts channel management via type 22
    pub message_22: bool,
    /// Assigned mode
    pub assigned: bool,
    /// RAIM in use
    pub raim: bool,
    /// Radio status
    pub radio_status: u32,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl StandardClassBPositionReport {
    /// Accepted payload length
    pub const LENGTH: LengthPolicy = LengthPolicy::Exact(STANDARD_CLASS_B_BITS);

    /// Decode a standard class B position report
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let mut violations = Vec::new();
        let kinematics = ClassBKinematics::read(bits, &mut violations)?;

        Ok(StandardClassBPositionReport {
            envelope,
            speed_over_ground: kinematics.speed_over_ground,
            position_accuracy: kinematics.position_accuracy,
            longitude: kinematics.longitude,
            latitude: kinematics.latitude,
            course_over_ground: kinematics.course_over_ground,
            true_heading: kinematics.true_heading,
            timestamp: kinematics.timestamp,
            cs_unit: bits.boolean(141)?,
            display: bits.boolean(142)?,
            dsc: bits.boolean(143)?,
            band: bits.boolean(144)?,
            message_22: bits.boolean(145)?,
            assigned: bits.boolean(146)?,
            raim: bits.boolean(147)?,
            radio_status: bits.unsigned(148..=167)? as u32,
            violations,
        })
    }
}

/// Extended class B equipment position report (type 19)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedClassBPositionReport {
    /// Shared envelope
    pub envelope: MessageEnvelope,
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
    /// UTC second of the report
    pub timestamp: u8,
    /// Vessel name
    pub vessel_name: String,
    /// Ship and cargo type code
    pub ship_type: u8,
    /// Reference point dimensions
    pub dimensions: Dimensions,
    /// Position fixing device
    pub fix_type: PositionFixType,
    /// RAIM in use
    pub raim: bool,
    /// Data terminal not ready
    pub dte: bool,
    /// Assigned mode
    pub assigned: bool,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl ExtendedClassBPositionReport {
    /// Accepted payload length
    pub const LENGTH: LengthPolicy = LengthPolicy::Exact(EXTENDED_CLASS_B_BITS);

    /// Decode an extended class B position report
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let mut violations = Vec::new();
        let kinematics = ClassBKinematics::read(bits, &mut violations)?;

        Ok(ExtendedClassBPositionReport {
            envelope,
            speed_over_ground: kinematics.speed_over_ground,
            position_accuracy: kinematics.position_accuracy,
            longitude: kinematics.longitude,
            latitude: kinematics.latitude,
            course_over_ground: kinematics.course_over_ground,
            true_heading: kinematics.true_heading,
            timestamp: kinematics.timestamp,
            vessel_name: bits.text(143..=262)?,
            ship_type: bits.unsigned(263..=270)? as u8,
            dimensions: Dimensions::read(bits, 271)?,
            fix_type: PositionFixType::from(bits.unsigned(301..=304)? as u8),
            raim: bits.boolean(305)?,
            dte: bits.boolean(306)?,
            assigned: bits.boolean(307)?,
            violations,
        })
    }
}
