//! Base station report (message type 4)

use crate::consts::BASE_STATION_BITS;
use crate::core::BitSequence;
use crate::envelope::{decode_envelope, LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::messages::common::{read_signed, PositionFixType};
use crate::validation::{Violation, LATITUDE, LONGITUDE};

/// UTC time and position broadcast by a shore station
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStationReport {
    /// Shared envelope
    pub envelope: MessageEnvelope,
    /// UTC year (0 = not available)
    pub year: u16,
    /// UTC month (0 = not available)
    pub month: u8,
    /// UTC day (0 = not available)
    pub day: u8,
    /// UTC hour (24 = not available)
    pub hour: u8,
    /// UTC minute (60 = not available)
    pub minute: u8,
    /// UTC second (60 = not available)
    pub second: u8,
    /// High (< 10 m) position accuracy
    pub position_accuracy: bool,
    /// Longitude in degrees
    pub longitude: Option<f64>,
    /// Latitude in degrees
    pub latitude: Option<f64>,
    /// Position fixing device
    pub fix_type: PositionFixType,
    /// RAIM in use
    pub raim: bool,
    /// Radio status
    pub radio_status: u32,
    /// Out-of-range fields
    pub violations: Vec<Violation>,
}

impl BaseStationReport {
    /// Accepted payload length
    pub const LENGTH: LengthPolicy = LengthPolicy::Exact(BASE_STATION_BITS);

    /// Decode a base station report
    pub fn decode(bits: &BitSequence) -> Result<Self> {
        let envelope = decode_envelope(bits, Self::LENGTH)?;
        let mut violations = Vec::new();

        let longitude = read_signed(bits, 79..=106, &LONGITUDE, &mut violations)?;
        let latitude = read_signed(bits, 107..=133, &LATITUDE, &mut violations)?;

        Ok(BaseStationReport {
            envelope,
            year: bits.unsigned(38..=51)? as u16,
            month: bits.unsigned(52..=55)? as u8,
            day: bits.unsigned(56..=60)? as u8,
            hour: bits.unsigned(61..=65)? as u8,
            minute: bits.unsigned(66..=71)? as u8,
            second: bits.unsigned(72..=77)? as u8,
            position_accuracy: bits.boolean(78)?,
            longitude,
            latitude,
            fix_type: PositionFixType::from(bits.unsigned(134..=137)? as u8),
            raim: bits.boolean(148)?,
            radio_status: bits.unsigned(149..=167)? as u32,
            violations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_base_station() -> Result<()> {
        let bits = BitSequence::decode("403OviQuMGCqWrRO9>E6fE700@GO", 0)?;
        let report = BaseStationReport::decode(&bits)?;

        assert_eq!(report.envelope.message_type, 4);
        assert_eq!(report.envelope.source_id, 3669702);
        assert_eq!(
            (report.year, report.month, report.day),
            (2007, 5, 14)
        );
        assert_eq!((report.hour, report.minute, report.second), (19, 57, 39));
        assert!(report.position_accuracy);
        assert!((report.longitude.unwrap() + 76.352362).abs() < 1e-5);
        assert!((report.latitude.unwrap() - 36.883767).abs() < 1e-5);
        assert_eq!(report.fix_type, PositionFixType::Surveyed);
        assert!(!report.raim);
        assert_eq!(report.radio_status, 67039);
        assert!(report.violations.is_empty());
        Ok(())
    }
}
