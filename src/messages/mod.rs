//! Decoded AIS messages and the built-in message kinds

pub mod aid_to_navigation;
pub mod base_station;
pub mod class_b;
pub mod common;
pub mod long_range;
pub mod position_report;
pub mod raw;
pub mod sar_aircraft;
pub mod static_data;
pub mod static_voyage;

pub use aid_to_navigation::{AidToNavigationReport, AidType};
pub use base_station::BaseStationReport;
pub use class_b::{ExtendedClassBPositionReport, StandardClassBPositionReport};
pub use common::{
    Dimensions, Eta, ManeuverIndicator, NavigationStatus, Position, PositionFixType, RateOfTurn,
};
pub use long_range::LongRangeBroadcast;
pub use position_report::PositionReport;
pub use raw::RawMessage;
pub use sar_aircraft::SarAircraftPositionReport;
pub use static_data::{
    StaticDataContent, StaticDataPart, StaticDataPartB, StaticDataReport, VesselReference,
};
pub use static_voyage::StaticAndVoyageData;

use crate::core::BitSequence;
use crate::envelope::{LengthPolicy, MessageEnvelope};
use crate::error::Result;
use crate::validation::Violation;

/// A fully decoded AIS message
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    /// Types 1, 2 and 3
    PositionReport(PositionReport),
    /// Type 4
    BaseStationReport(BaseStationReport),
    /// Type 5
    StaticAndVoyageData(StaticAndVoyageData),
    /// Type 9
    SarAircraftPositionReport(SarAircraftPositionReport),
    /// Type 18
    StandardClassBPositionReport(StandardClassBPositionReport),
    /// Type 19
    ExtendedClassBPositionReport(ExtendedClassBPositionReport),
    /// Type 21
    AidToNavigationReport(AidToNavigationReport),
    /// Type 24
    StaticDataReport(StaticDataReport),
    /// Type 27
    LongRangeBroadcast(LongRangeBroadcast),
    /// Any type accepted without a dedicated layout
    Raw(RawMessage),
}

impl Message {
    /// Get the shared envelope
    pub fn envelope(&self) -> &MessageEnvelope {
        match self {
            Message::PositionReport(m) => &m.envelope,
            Message::BaseStationReport(m) => &m.envelope,
            Message::StaticAndVoyageData(m) => &m.envelope,
            Message::SarAircraftPositionReport(m) => &m.envelope,
            Message::StandardClassBPositionReport(m) => &m.envelope,
            Message::ExtendedClassBPositionReport(m) => &m.envelope,
            Message::AidToNavigationReport(m) => &m.envelope,
            Message::StaticDataReport(m) => &m.envelope,
            Message::LongRangeBroadcast(m) => &m.envelope,
            Message::Raw(m) => &m.envelope,
        }
    }

    /// Get the out-of-range fields recorded while decoding
    pub fn violations(&self) -> &[Violation] {
        match self {
            Message::PositionReport(m) => &m.violations,
            Message::BaseStationReport(m) => &m.violations,
            Message::StaticAndVoyageData(m) => &m.violations,
            Message::SarAircraftPositionReport(m) => &m.violations,
            Message::StandardClassBPositionReport(m) => &m.violations,
            Message::ExtendedClassBPositionReport(m) => &m.violations,
            Message::AidToNavigationReport(m) => &m.violations,
            Message::StaticDataReport(m) => &m.violations,
            Message::LongRangeBroadcast(m) => &m.violations,
            Message::Raw(m) => &m.violations,
        }
    }

    /// Message type (0-63)
    pub fn message_type(&self) -> u8 {
        self.envelope().message_type
    }

    /// Repeat indicator (0-3)
    pub fn repeat_indicator(&self) -> u8 {
        self.envelope().repeat_indicator
    }

    /// MMSI of the transmitting station
    pub fn source_id(&self) -> u32 {
        self.envelope().source_id
    }

    /// Check if any field was out of range
    pub fn has_violations(&self) -> bool {
        !self.violations().is_empty()
    }

    /// Reported position, when the message carries one and both
    /// coordinates are available
    pub fn position(&self) -> Option<Position> {
        let (longitude, latitude) = match self {
            Message::PositionReport(m) => (m.longitude, m.latitude),
            Message::BaseStationReport(m) => (m.longitude, m.latitude),
            Message::SarAircraftPositionReport(m) => (m.longitude, m.latitude),
            Message::StandardClassBPositionReport(m) => (m.longitude, m.latitude),
            Message::ExtendedClassBPositionReport(m) => (m.longitude, m.latitude),
            Message::AidToNavigationReport(m) => (m.longitude, m.latitude),
            Message::LongRangeBroadcast(m) => (m.longitude, m.latitude),
            Message::StaticAndVoyageData(_) | Message::StaticDataReport(_) | Message::Raw(_) => {
                return None
            }
        };
        Some(Position {
            latitude: latitude?,
            longitude: longitude?,
        })
    }

    /// The built-in kind that produced this message, if any
    pub fn kind(&self) -> Option<MessageKind> {
        match self {
            Message::Raw(_) => None,
            _ => MessageKind::from_type_id(self.message_type()),
        }
    }
}

/// Built-in message layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    /// Type 1
    PositionReportScheduled,
    /// Type 2
    PositionReportAssigned,
    /// Type 3
    PositionReportInterrogated,
    /// Type 4
    BaseStationReport,
    /// Type 5
    StaticAndVoyageData,
    /// Type 9
    SarAircraftPositionReport,
    /// Type 18
    StandardClassBPositionReport,
    /// Type 19
    ExtendedClassBPositionReport,
    /// Type 21
    AidToNavigationReport,
    /// Type 24
    StaticDataReport,
    /// Type 27
    LongRangeBroadcast,
}

impl MessageKind {
    /// Every built-in kind
    pub const ALL: [MessageKind; 11] = [
        MessageKind::PositionReportScheduled,
        MessageKind::PositionReportAssigned,
        MessageKind::PositionReportInterrogated,
        MessageKind::BaseStationReport,
        MessageKind::StaticAndVoyageData,
        MessageKind::SarAircraftPositionReport,
        MessageKind::StandardClassBPositionReport,
        MessageKind::ExtendedClassBPositionReport,
        MessageKind::AidToNavigationReport,
        MessageKind::StaticDataReport,
        MessageKind::LongRangeBroadcast,
    ];

    /// Message type this kind decodes
    pub fn type_id(self) -> u8 {
        match self {
            MessageKind::PositionReportScheduled => 1,
            MessageKind::PositionReportAssigned => 2,
            MessageKind::PositionReportInterrogated => 3,
            MessageKind::BaseStationReport => 4,
            MessageKind::StaticAndVoyageData => 5,
            MessageKind::SarAircraftPositionReport => 9,
            MessageKind::StandardClassBPositionReport => 18,
            MessageKind::ExtendedClassBPositionReport => 19,
            MessageKind::AidToNavigationReport => 21,
            MessageKind::StaticDataReport => 24,
            MessageKind::LongRangeBroadcast => 27,
        }
    }

    /// Look up the built-in kind for a message type
    pub fn from_type_id(type_id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_id() == type_id)
    }

    /// Stable name of the kind
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::PositionReportScheduled => "position_report_scheduled",
            MessageKind::PositionReportAssigned => "position_report_assigned",
            MessageKind::PositionReportInterrogated => "position_report_interrogated",
            MessageKind::BaseStationReport => "base_station_report",
            MessageKind::StaticAndVoyageData => "static_and_voyage_data",
            MessageKind::SarAircraftPositionReport => "sar_aircraft_position_report",
            MessageKind::StandardClassBPositionReport => "standard_class_b_position_report",
            MessageKind::ExtendedClassBPositionReport => "extended_class_b_position_report",
            MessageKind::AidToNavigationReport => "aid_to_navigation_report",
            MessageKind::StaticDataReport => "static_data_report",
            MessageKind::LongRangeBroadcast => "long_range_broadcast",
        }
    }

    /// Accepted payload lengths
    pub fn length_policy(self) -> LengthPolicy {
        match self {
            MessageKind::PositionReportScheduled
            | MessageKind::PositionReportAssigned
            | MessageKind::PositionReportInterrogated => PositionReport::LENGTH,
            MessageKind::BaseStationReport => BaseStationReport::LENGTH,
            MessageKind::StaticAndVoyageData => StaticAndVoyageData::LENGTH,
            MessageKind::SarAircraftPositionReport => SarAircraftPositionReport::LENGTH,
            MessageKind::StandardClassBPositionReport => StandardClassBPositionReport::LENGTH,
            MessageKind::ExtendedClassBPositionReport => ExtendedClassBPositionReport::LENGTH,
            MessageKind::AidToNavigationReport => AidToNavigationReport::LENGTH,
            MessageKind::StaticDataReport => StaticDataReport::LENGTH,
            MessageKind::LongRangeBroadcast => LongRangeBroadcast::LENGTH,
        }
    }

    /// Decode `bits` with this kind's layout
    pub fn decode(self, bits: &BitSequence) -> Result<Message> {
        Ok(match self {
            MessageKind::PositionReportScheduled
            | MessageKind::PositionReportAssigned
            | MessageKind::PositionReportInterrogated => {
                Message::PositionReport(PositionReport::decode(bits)?)
            }
            MessageKind::BaseStationReport => {
                Message::BaseStationReport(BaseStationReport::decode(bits)?)
            }
            MessageKind::StaticAndVoyageData => {
                Message::StaticAndVoyageData(StaticAndVoyageData::decode(bits)?)
            }
            MessageKind::SarAircraftPositionReport => {
                Message::SarAircraftPositionReport(SarAircraftPositionReport::decode(bits)?)
            }
            MessageKind::StandardClassBPositionReport => Message::StandardClassBPositionReport(
                StandardClassBPositionReport::decode(bits)?,
            ),
            MessageKind::ExtendedClassBPositionReport => Message::ExtendedClassBPositionReport(
                ExtendedClassBPositionReport::decode(bits)?,
            ),
            MessageKind::AidToNavigationReport => {
                Message::AidToNavigationReport(AidToNavigationReport::decode(bits)?)
            }
            MessageKind::StaticDataReport => {
                Message::StaticDataReport(StaticDataReport::decode(bits)?)
            }
            MessageKind::LongRangeBroadcast => {
                Message::LongRangeBroadcast(LongRangeBroadcast::decode(bits)?)
            }
        })
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (type {})", self.name(), self.type_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_type_ids_are_unique() {
        for kind in MessageKind::ALL {
            assert_eq!(MessageKind::from_type_id(kind.type_id()), Some(kind));
        }
        assert_eq!(MessageKind::from_type_id(8), None);
    }

    #[test]
    fn test_message_accessors() -> Result<()> {
        let bits = BitSequence::decode("13u?etPv2;0n:dDPwUM1U1Cb069D", 0)?;
        let message = MessageKind::PositionReportScheduled.decode(&bits)?;

        assert_eq!(message.message_type(), 1);
        assert_eq!(message.repeat_indicator(), 0);
        assert_eq!(message.source_id(), 265547250);
        assert!(!message.has_violations());
        assert_eq!(message.kind(), Some(MessageKind::PositionReportScheduled));

        let position = message.position().unwrap();
        assert!((position.latitude - 57.660353).abs() < 1e-6);
        assert!((position.longitude - 11.832977).abs() < 1e-6);
        Ok(())
    }

    #[test]
    fn test_position_requires_both_coordinates() -> Result<()> {
        // Longitude carries the "not available" sentinel
        let bits = BitSequence::decode("1Cu?etPP?w<tSF0nG0@>M?wqP000", 0)?;
        let message = MessageKind::PositionReportScheduled.decode(&bits)?;
        assert_eq!(message.position(), None);
        assert!(message.has_violations());
        Ok(())
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(
            MessageKind::LongRangeBroadcast.to_string(),
            "long_range_broadcast (type 27)"
        );
    }
}
