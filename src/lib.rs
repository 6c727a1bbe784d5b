//! # AIS Payload Decoder
//!
//! A Rust library for decoding AIS (Automatic Identification System) messages
//! from their six-bit armored sentence payloads.
//!
//! AIS binary messages travel inside text sentences, six bits per character,
//! and long messages are split across several sentences. This library
//! provides:
//!
//! - Six-bit armor decoding into range-checked bit sequences
//! - Ordered reassembly of multi-sentence payloads
//! - A thread-safe, extensible registry of message decoders
//! - Decoders for message types 1-5, 9, 18, 19, 21, 24 and 27
//! - Non-fatal validation: out-of-range fields are reported, not rejected
//!
//! Splitting sentences and verifying their checksums is left to the caller.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization support
//!
//! ## Example
//!
//! ```
//! use ais_parser::{Message, Parser, PayloadFragment};
//!
//! let parser = Parser::default();
//! let message = parser.create(&[PayloadFragment::new(1, "13u?etPv2;0n:dDPwUM1U1Cb069D", 0)])?;
//!
//! assert_eq!(message.source_id(), 265547250);
//! if let Message::PositionReport(report) = &message {
//!     println!("{:?} {:?}", report.latitude, report.longitude);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod fragment;
pub mod messages;
pub mod parser;
pub mod registry;
pub mod validation;

pub use crate::core::BitSequence;
pub use envelope::{LengthPolicy, MessageEnvelope};
pub use error::{ParseError, Result};
pub use fragment::{AssembledPayload, FragmentAssembler, PayloadFragment};
pub use messages::{Message, MessageKind};
pub use parser::{Parser, ParserBuilder};
pub use registry::{MessageDecoder, MessageRegistry, RawDecoder};
pub use validation::Violation;

/// AIS protocol constants
pub mod consts {
    use std::ops::RangeInclusive;

    /// Bits carried by one armored character
    pub const BITS_PER_CHAR: usize = 6;

    /// Character codes mapping to six-bit values 0-39
    pub const ARMOR_LOW: RangeInclusive<u32> = 48..=87;

    /// Character codes mapping to six-bit values 40-63
    pub const ARMOR_HIGH: RangeInclusive<u32> = 96..=119;

    /// Largest fill-bit count a sentence may carry
    pub const MAX_FILL_BITS: u8 = 5;

    /// Width of the shared envelope (type, repeat indicator, MMSI)
    pub const ENVELOPE_BITS: usize = 38;

    /// Largest message type a six-bit field can hold
    pub const MAX_MESSAGE_TYPE: u8 = 63;

    /// Rate-of-turn indicator scale
    pub const ROT_SCALE: f64 = 4.733;

    /// Types 1, 2 and 3
    pub const POSITION_REPORT_BITS: usize = 168;

    /// Type 4
    pub const BASE_STATION_BITS: usize = 168;

    /// Type 5
    pub const STATIC_VOYAGE_BITS: usize = 424;

    /// Type 9
    pub const SAR_AIRCRAFT_BITS: usize = 168;

    /// Type 18
    pub const STANDARD_CLASS_B_BITS: usize = 168;

    /// Type 19
    pub const EXTENDED_CLASS_B_BITS: usize = 312;

    /// Type 21 without a name extension
    pub const AID_TO_NAVIGATION_MIN_BITS: usize = 272;

    /// Type 21 with the longest name extension
    pub const AID_TO_NAVIGATION_MAX_BITS: usize = 360;

    /// Type 24 part A
    pub const STATIC_DATA_PART_A_BITS: usize = 160;

    /// Type 24 part B
    pub const STATIC_DATA_PART_B_BITS: usize = 168;

    /// Type 27
    pub const LONG_RANGE_BITS: usize = 96;
}
