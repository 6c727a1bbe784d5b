//! Long-range AIS broadcast (message type 27)

use crate::consts::LONG_RANGE_BITS;
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::messages::common::{read_signed, read_unsigned, NavigationStatus};
use crate::validation::{
    check_enumerated, Violation, COURSE_LONG_RANGE, LATITUDE_LONG_RANGE, LONGITUDE_LONG_RANGE,
    NAVIGATION_STATUS, SPEED_LONG_RANGE,
};

/// Compact position report for satellite reception
///
/// Position is in 1/10 minute and speed and course in whole units.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LongRangeBroadcast {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// High (< 10 m) position accuracy
    pub position_accuracy: bool,
    /// RAIM in use
    pub raim: bool,
    /// Navigational status
    pub navigation_status: NavigationStatus,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Speed over ground in knots
    pub speed_over_ground: Option<f64>,
    /// Course over ground in degrees
    pub course_over_ground: Option<f64>,
    /// Position latency: false when the fix is under 5 seconds old, true
    /// when it is older or not current
    pub position_latency: bool,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl LongRangeBroadcast {
    /// Accepted payload length
    pub const LENGTH: LengthPolicy = LengthPolicy::Exact(LONG_RANGE_BITS);

    /// Decode a long-range broadcast
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let mut violations = Vec::new();

        let status = bits.unsigned(40..=43)?;
        check_enumerated(
            "navigation_status",
            status as i64,
            NAVIGATION_STATUS,
            &mut violations,
        );

        let longitude = read_signed(bits, 44..=61, &LONGITUDE_LONG_RANGE, &mut violations)?;
        let latitude = read_signed(bits, 62..=78, &LATITUDE_LONG_RANGE, &mut violations)?;
        let speed_over_ground = read_unsigned(bits, 79..=84, &SPEED_LONG_RANGE, &mut violations)?;
        let course_over_ground =
            read_unsigned(bits, 85..=93, &COURSE_LONG_RANGE, &mut violations)?;

        Ok(LongRangeBroadcast {
            envelope,
            position_accuracy: bits.boolean(38)?,
            raim: bits.boolean(39)?,
            navigation_status: NavigationStatus::from(status as u8),
            longitude,
            latitude,
            speed_over_ground,
            course_over_ground,
            position_latency: bits.boolean(94)?,
            violations,
        })
    }
}
