//! Error types for AIS payload decoding

use thiserror::Error;

/// Result type for AIS decoding operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Structural errors encountered while decoding an AIS payload.
///
/// Out-of-range field values are not errors; they are reported as
/// [`Violation`](crate::validation::Violation)s on an otherwise decoded message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A payload character outside the six-bit armor alphabet
    #[error("Invalid armor character {character:?} at position {position}")]
    InvalidArmor {
        /// The offending character
        character: char,
        /// Character offset within the armored payload
        position: usize,
    },

    /// A bit range reaching past the end of the sequence
    #[error("Bit range {start}..={end} out of range for {len} bits")]
    OutOfRange {
        /// First bit of the requested range
        start: usize,
        /// Last bit of the requested range (inclusive)
        end: usize,
        /// Length of the bit sequence
        len: usize,
    },

    /// Payload length does not satisfy the message type's length policy
    #[error("Message type {message_type} expects {expected} bits, got {actual}")]
    LengthMismatch {
        /// Message type read from the envelope
        message_type: u8,
        /// Human-readable description of the accepted lengths
        expected: String,
        /// Actual bit length
        actual: usize,
    },

    /// A fragment arrived out of order
    #[error("Fragment sequence error: expected fragment {expected}, found {found}")]
    SequenceError {
        /// Fragment index the assembler was waiting for
        expected: u32,
        /// Fragment index that arrived
        found: u32,
    },

    /// No decoder registered for the message type
    #[error("Unsupported message type: {0}")]
    UnsupportedType(u8),

    /// An argument outside its accepted domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ParseError {
    /// Create a new InvalidArgument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        ParseError::InvalidArgument(msg.into())
    }

    /// Create a new OutOfRange error
    pub fn out_of_range(start: usize, end: usize, len: usize) -> Self {
        ParseError::OutOfRange { start, end, len }
    }

    /// Create a new SequenceError
    pub fn sequence_error(expected: u32, found: u32) -> Self {
        ParseError::SequenceError { expected, found }
    }

    /// Create a new LengthMismatch error
    pub fn length_mismatch(message_type: u8, expected: impl Into<String>, actual: usize) -> Self {
        ParseError::LengthMismatch {
            message_type,
            expected: expected.into(),
            actual,
        }
    }
}
