//! Registry mapping AIS message types to decoders
//!
//! [`MessageRegistry`] is the only shared mutable state in the crate. It is
//! built explicitly, shared through an `Arc`, and may be changed while other
//! threads decode. Each binding is replaced atomically, so a lookup sees
//! either the old or the new decoder for a type. Decoders are cloned out of
//! the map before use and no map lock is held while a message is decoded.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::consts::MAX_MESSAGE_TYPE;
use crate::core::BitSequence;
use crate::envelope::LengthPolicy;
use crate::error::{ParseError, Result};
use crate::messages::{Message, MessageKind, RawMessage};

/// Decodes one message layout from a bit sequence
pub trait MessageDecoder: Send + Sync {
    /// Stable name, used to identify bindings on unregistration
    fn name(&self) -> &'static str;

    /// Accepted payload lengths
    fn length_policy(&self) -> LengthPolicy;

    /// Decode the whole message, envelope included
    fn decode(&self, bits: &BitSequence) -> Result<Message>;
}

impl MessageDecoder for MessageKind {
    fn name(&self) -> &'static str {
        MessageKind::name(*self)
    }

    fn length_policy(&self) -> LengthPolicy {
        MessageKind::length_policy(*self)
    }

    fn decode(&self, bits: &BitSequence) -> Result<Message> {
        MessageKind::decode(*self, bits)
    }
}

/// Decoder that keeps the payload undecoded
///
/// Lets callers accept message types without a built-in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDecoder {
    /// Accepted payload lengths
    pub length: LengthPolicy,
}

impl RawDecoder {
    /// Accept any payload holding at least an envelope
    pub fn new() -> Self {
        RawDecoder {
            length: LengthPolicy::Between {
                min: crate::consts::ENVELOPE_BITS,
                max: usize::MAX,
            },
        }
    }
}

impl Default for RawDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageDecoder for RawDecoder {
    fn name(&self) -> &'static str {
        "raw"
    }

    fn length_policy(&self) -> LengthPolicy {
        self.length
    }

    fn decode(&self, bits: &BitSequence) -> Result<Message> {
        crate::envelope::decode_envelope(bits, self.length)?;
        Ok(Message::Raw(RawMessage::decode(bits)?))
    }
}

/// Concurrent map from message type to decoder
#[derive(Default)]
pub struct MessageRegistry {
    decoders: DashMap<u8, Arc<dyn MessageDecoder>>,
}

impl MessageRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every built-in kind bound to its type
    pub fn with_builtin_types() -> Self {
        let registry = Self::new();
        for kind in MessageKind::ALL {
            registry.decoders.insert(kind.type_id(), Arc::new(kind));
        }
        registry
    }

    /// Bind `decoder` to `type_id`, returning the decoder it replaced.
    ///
    /// The last registration for a type wins.
    pub fn register(
        &self,
        type_id: u8,
        decoder: Arc<dyn MessageDecoder>,
    ) -> Result<Option<Arc<dyn MessageDecoder>>> {
        if type_id > MAX_MESSAGE_TYPE {
            return Err(ParseError::invalid_argument(format!(
                "Message type {} out of range [0, {}]",
                type_id, MAX_MESSAGE_TYPE
            )));
        }

        debug!(type_id, decoder = decoder.name(), "registering decoder");
        Ok(self.decoders.insert(type_id, decoder))
    }

    /// Remove every binding to a decoder with the same name as `decoder`.
    ///
    /// Returns the number of bindings removed.
    pub fn unregister(&self, decoder: &dyn MessageDecoder) -> usize {
        let name = decoder.name();
        let mut removed = 0usize;
        self.decoders.retain(|_, bound| {
            let keep = bound.name() != name;
            if !keep {
                removed += 1;
            }
            keep
        });
        debug!(decoder = name, removed, "unregistered decoder");
        removed
    }

    /// Check if a decoder is bound to `type_id`
    pub fn has(&self, type_id: u8) -> bool {
        self.decoders.contains_key(&type_id)
    }

    /// Get the decoder bound to `type_id`
    pub fn get(&self, type_id: u8) -> Option<Arc<dyn MessageDecoder>> {
        self.decoders
            .get(&type_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Bound message types, in ascending order
    pub fn type_ids(&self) -> Vec<u8> {
        let mut ids: Vec<u8> = self.decoders.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Check if the registry has no bindings
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl std::fmt::Debug for MessageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRegistry")
            .field("type_ids", &self.type_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry() {
        let registry = MessageRegistry::with_builtin_types();
        assert_eq!(
            registry.type_ids(),
            vec![1, 2, 3, 4, 5, 9, 18, 19, 21, 24, 27]
        );
        assert!(registry.has(24));
        assert!(!registry.has(8));
    }

    #[test]
    fn test_register_replaces_binding() -> Result<()> {
        let registry = MessageRegistry::with_builtin_types();
        let previous = registry.register(1, Arc::new(RawDecoder::new()))?;
        assert_eq!(previous.map(|d| d.name()), Some("position_report_scheduled"));
        assert_eq!(registry.get(1).map(|d| d.name()), Some("raw"));
        Ok(())
    }

    #[test]
    fn test_register_rejects_wide_type() {
        let registry = MessageRegistry::new();
        assert!(matches!(
            registry.register(64, Arc::new(RawDecoder::new())),
            Err(ParseError::InvalidArgument(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unregister_removes_all_bindings() -> Result<()> {
        let registry = MessageRegistry::new();
        registry.register(6, Arc::new(RawDecoder::new()))?;
        registry.register(8, Arc::new(RawDecoder::new()))?;
        registry.register(1, Arc::new(MessageKind::PositionReportScheduled))?;

        assert_eq!(registry.unregister(&RawDecoder::new()), 2);
        assert_eq!(registry.type_ids(), vec![1]);
        assert_eq!(registry.unregister(&RawDecoder::new()), 0);
        Ok(())
    }

    #[test]
    fn test_raw_decoder_keeps_bits() -> Result<()> {
        let bits = BitSequence::decode("85Mwp`1Kf3aCnsNvBWLi=wQuNhA5t43N`5nCuI=p<IBfVqnMgPGs", 0)?;
        let message = RawDecoder::new().decode(&bits)?;
        let Message::Raw(raw) = message else {
            panic!("expected raw message");
        };
        assert_eq!(raw.envelope.message_type, 8);
        assert_eq!(raw.body_len(), bits.len() - 38);
        assert_eq!(raw.bits, bits);
        Ok(())
    }
}
