//! High-level message factory for AIS payloads

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::BitSequence;
use crate::envelope::MessageEnvelope;
use crate::error::{ParseError, Result};
use crate::fragment::{FragmentAssembler, PayloadFragment};
use crate::messages::Message;
use crate::registry::MessageRegistry;

/// AIS message factory
///
/// Reassembles fragments, reads the message type from the envelope and
/// dispatches to the decoder bound in its [`MessageRegistry`]. Cloning a
/// parser shares the registry.
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Arc<MessageRegistry>,
}

impl Parser {
    /// Create a parser over an existing registry
    pub fn new(registry: Arc<MessageRegistry>) -> Self {
        Parser { registry }
    }

    /// Get the shared registry
    pub fn registry(&self) -> &Arc<MessageRegistry> {
        &self.registry
    }

    /// Decode a logical message from its ordered fragments
    pub fn create(&self, fragments: &[PayloadFragment]) -> Result<Message> {
        let payload = FragmentAssembler::assemble(fragments)?;
        let bits = payload.to_bits()?;
        self.decode_bits(&bits)
    }

    /// Decode a message carried by a single sentence
    pub fn parse_payload(&self, payload: &str, fill_bits: u8) -> Result<Message> {
        self.create(&[PayloadFragment::new(1, payload, fill_bits)])
    }

    /// Decode an already assembled bit sequence.
    ///
    /// The bound decoder's length policy is checked before it runs.
    pub fn decode_bits(&self, bits: &BitSequence) -> Result<Message> {
        let envelope = MessageEnvelope::peek(bits)?;
        let decoder = match self.registry.get(envelope.message_type) {
            Some(decoder) => decoder,
            None => {
                warn!(
                    message_type = envelope.message_type,
                    source_id = envelope.source_id,
                    "no decoder registered"
                );
                return Err(ParseError::UnsupportedType(envelope.message_type));
            }
        };

        let policy = decoder.length_policy();
        if !policy.accepts(bits.len()) {
            debug!(
                message_type = envelope.message_type,
                decoder = decoder.name(),
                expected = %policy,
                actual = bits.len(),
                "payload length rejected"
            );
            return Err(ParseError::length_mismatch(
                envelope.message_type,
                policy.to_string(),
                bits.len(),
            ));
        }

        let message = decoder.decode(bits)?;
        debug!(
            message_type = envelope.message_type,
            source_id = envelope.source_id,
            decoder = decoder.name(),
            violations = message.violations().len(),
            "decoded message"
        );
        Ok(message)
    }
}

impl Default for Parser {
    fn default() -> Self {
        ParserBuilder::new().build()
    }
}

/// Builder for AIS message parsers
pub struct ParserBuilder {
    registry: Option<Arc<MessageRegistry>>,
    builtin_types: bool,
}

impl ParserBuilder {
    /// Create a new parser builder
    pub fn new() -> Self {
        ParserBuilder {
            registry: None,
            builtin_types: true,
        }
    }

    /// Share an existing registry; it is used as is
    pub fn with_registry(mut self, registry: Arc<MessageRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Start from an empty registry instead of the built-in kinds
    pub fn without_builtin_types(mut self) -> Self {
        self.builtin_types = false;
        self
    }

    /// Build the parser
    pub fn build(self) -> Parser {
        let registry = match self.registry {
            Some(registry) => registry,
            None if self.builtin_types => Arc::new(MessageRegistry::with_builtin_types()),
            None => Arc::new(MessageRegistry::new()),
        };
        Parser::new(registry)
    }
}

impl Default for ParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}
