//! Value types shared by several AIS message layouts

use std::ops::RangeInclusive;

use crate::consts::ROT_SCALE;
use crate::core::BitSequence;
use crate::error::Result;
use crate::validation::{RangedField, Violation};

/// Navigational status of a vessel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationStatus {
    /// Under way using engine
    UnderWayUsingEngine,
    /// At anchor
    AtAnchor,
    /// Not under command
    NotUnderCommand,
    /// Restricted manoeuvrability
    RestrictedManoeuvrability,
    /// Constrained by her draught
    ConstrainedByDraught,
    /// Moored
    Moored,
    /// Aground
    Aground,
    /// Engaged in fishing
    EngagedInFishing,
    /// Under way sailing
    UnderWaySailing,
    /// Reserved for future use (9-13)
    Reserved(u8),
    /// AIS-SART active
    AisSartActive,
    /// Not defined (default)
    NotDefined,
}

impl From<u8> for NavigationStatus {
    fn from(value: u8) -> Self {
        match value {
            0 => NavigationStatus::UnderWayUsingEngine,
            1 => NavigationStatus::AtAnchor,
            2 => NavigationStatus::NotUnderCommand,
            3 => NavigationStatus::RestrictedManoeuvrability,
            4 => NavigationStatus::ConstrainedByDraught,
            5 => NavigationStatus::Moored,
            6 => NavigationStatus::Aground,
            7 => NavigationStatus::EngagedInFishing,
            8 => NavigationStatus::UnderWaySailing,
            14 => NavigationStatus::AisSartActive,
            15 => NavigationStatus::NotDefined,
            other => NavigationStatus::Reserved(other),
        }
    }
}

/// Special maneuver indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManeuverIndicator {
    /// Not available (default)
    NotAvailable,
    /// Not engaged in special maneuver
    NoSpecialManeuver,
    /// Engaged in special maneuver
    SpecialManeuver,
    /// Undefined code
    Reserved(u8),
}

impl From<u8> for ManeuverIndicator {
    fn from(value: u8) -> Self {
        match value {
            0 => ManeuverIndicator::NotAvailable,
            1 => ManeuverIndicator::NoSpecialManeuver,
            2 => ManeuverIndicator::SpecialManeuver,
            other => ManeuverIndicator::Reserved(other),
        }
    }
}

/// Rate of turn reported by a class A transponder
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RateOfTurn {
    /// No turn information (raw -128)
    NotAvailable,
    /// Turning right faster than 5 degrees per 30 seconds (raw 127)
    FasterRight,
    /// Turning left faster than 5 degrees per 30 seconds (raw -127)
    FasterLeft,
    /// Degrees per minute, positive to starboard
    DegreesPerMinute(f64),
}

impl RateOfTurn {
    /// Convert the raw 8-bit signed indicator
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            -128 => RateOfTurn::NotAvailable,
            127 => RateOfTurn::FasterRight,
            -127 => RateOfTurn::FasterLeft,
            value => {
                let magnitude = (value as f64 / ROT_SCALE).powi(2);
                RateOfTurn::DegreesPerMinute(magnitude.copysign(value as f64))
            }
        }
    }

    /// Rate in degrees per minute, if the indicator carries one
    pub fn degrees_per_minute(&self) -> Option<f64> {
        match self {
            RateOfTurn::DegreesPerMinute(rate) => Some(*rate),
            _ => None,
        }
    }
}

/// Electronic position fixing device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionFixType {
    /// Undefined (default)
    Undefined,
    /// GPS
    Gps,
    /// GLONASS
    Glonass,
    /// Combined GPS/GLONASS
    CombinedGpsGlonass,
    /// Loran-C
    LoranC,
    /// Chayka
    Chayka,
    /// Integrated navigation system
    IntegratedNavigation,
    /// Surveyed position
    Surveyed,
    /// Galileo
    Galileo,
    /// Reserved code (9-14)
    Reserved(u8),
    /// Internal GNSS
    InternalGnss,
}

impl From<u8> for PositionFixType {
    fn from(value: u8) -> Self {
        match value {
            0 => PositionFixType::Undefined,
            1 => PositionFixType::Gps,
            2 => PositionFixType::Glonass,
            3 => PositionFixType::CombinedGpsGlonass,
            4 => PositionFixType::LoranC,
            5 => PositionFixType::Chayka,
            6 => PositionFixType::IntegratedNavigation,
            7 => PositionFixType::Surveyed,
            8 => PositionFixType::Galileo,
            15 => PositionFixType::InternalGnss,
            other => PositionFixType::Reserved(other),
        }
    }
}

/// Reference point offsets for reported position, in metres
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    /// Distance to bow
    pub to_bow: u16,
    /// Distance to stern
    pub to_stern: u16,
    /// Distance to port side
    pub to_port: u8,
    /// Distance to starboard side
    pub to_starboard: u8,
}

impl Dimensions {
    /// Read the 30-bit dimension block starting at `start`
    pub(crate) fn read(bits: &BitSequence, start: usize) -> Result<Self> {
        Ok(Dimensions {
            to_bow: bits.unsigned(start..=start + 8)? as u16,
            to_stern: bits.unsigned(start + 9..=start + 17)? as u16,
            to_port: bits.unsigned(start + 18..=start + 23)? as u8,
            to_starboard: bits.unsigned(start + 24..=start + 29)? as u8,
        })
    }

    /// Overall length
    pub fn length(&self) -> u16 {
        self.to_bow + self.to_stern
    }

    /// Overall beam
    pub fn beam(&self) -> u16 {
        u16::from(self.to_port) + u16::from(self.to_starboard)
    }
}

/// Estimated time of arrival, UTC
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Eta {
    /// Month (1-12, 0 = not available)
    pub month: u8,
    /// Day (1-31, 0 = not available)
    pub day: u8,
    /// Hour (0-23, 24 = not available)
    pub hour: u8,
    /// Minute (0-59, 60 = not available)
    pub minute: u8,
}

/// A geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Latitude, positive north
    pub latitude: f64,
    /// Longitude, positive east
    pub longitude: f64,
}

/// Read a signed, scaled field through its descriptor
pub(crate) fn read_signed(
    bits: &BitSequence,
    range: RangeInclusive<usize>,
    field: &RangedField,
    violations: &mut Vec<Violation>,
) -> Result<Option<f64>> {
    Ok(field.apply(bits.signed(range)?, violations))
}

/// Read an unsigned, scaled field through its descriptor
pub(crate) fn read_unsigned(
    bits: &BitSequence,
    range: RangeInclusive<usize>,
    field: &RangedField,
    violations: &mut Vec<Violation>,
) -> Result<Option<f64>> {
    Ok(field.apply(bits.unsigned(range)? as i64, violations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_of_turn_special_values() {
        assert_eq!(RateOfTurn::from_raw(-128), RateOfTurn::NotAvailable);
        assert_eq!(RateOfTurn::from_raw(127), RateOfTurn::FasterRight);
        assert_eq!(RateOfTurn::from_raw(-127), RateOfTurn::FasterLeft);
        assert_eq!(RateOfTurn::from_raw(0).degrees_per_minute(), Some(0.0));
    }

    #[test]
    fn test_rate_of_turn_formula_keeps_sign() {
        let left = RateOfTurn::from_raw(-8).degrees_per_minute().unwrap();
        let right = RateOfTurn::from_raw(8).degrees_per_minute().unwrap();
        assert!((right - 2.856_978).abs() < 1e-5);
        assert!((left + right).abs() < 1e-12);

        let fastest = RateOfTurn::from_raw(126).degrees_per_minute().unwrap();
        assert!((fastest - 708.7).abs() < 0.1);
    }

    #[test]
    fn test_navigation_status_codes() {
        assert_eq!(NavigationStatus::from(5), NavigationStatus::Moored);
        assert_eq!(NavigationStatus::from(11), NavigationStatus::Reserved(11));
        assert_eq!(NavigationStatus::from(15), NavigationStatus::NotDefined);
    }

    #[test]
    fn test_dimensions_totals() {
        let dims = Dimensions {
            to_bow: 225,
            to_stern: 70,
            to_port: 1,
            to_starboard: 31,
        };
        assert_eq!(dims.length(), 295);
        assert_eq!(dims.beam(), 32);
    }
}
