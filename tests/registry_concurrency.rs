//! Registry updates racing with message creation.

use std::sync::{Arc, Barrier};
use std::thread;

use ais_parser::{MessageKind, MessageRegistry, ParseError, Parser, ParserBuilder, RawDecoder};

const CLASS_A: &str = "13u?etPv2;0n:dDPwUM1U1Cb069D";
const LONG_RANGE: &str = "K3Q9r=hOcoRl<77l";

#[test]
fn register_while_creating() {
    let registry = Arc::new(MessageRegistry::with_builtin_types());
    let parser = ParserBuilder::new()
        .with_registry(Arc::clone(&registry))
        .build();
    let barrier = Arc::new(Barrier::new(5));

    let writers: Vec<_> = (0..2u8)
        .map(|writer| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                // Distinct ids with no built-in decoder
                for type_id in (30 + writer * 16)..(30 + writer * 16 + 16) {
                    registry
                        .register(type_id, Arc::new(RawDecoder::new()))
                        .expect("type id in range");
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..3)
        .map(|_| {
            let parser: Parser = parser.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..500 {
                    let message = parser.parse_payload(CLASS_A, 0).expect("type 1 stays registered");
                    assert_eq!(message.kind(), Some(MessageKind::PositionReportScheduled));
                    let message = parser.parse_payload(LONG_RANGE, 0).expect("type 27 stays registered");
                    assert_eq!(message.kind(), Some(MessageKind::LongRangeBroadcast));
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("thread completes");
    }

    for type_id in 30..62u8 {
        assert!(registry.has(type_id));
    }
}

#[test]
fn replacing_a_decoder_is_atomic() {
    let registry = Arc::new(MessageRegistry::with_builtin_types());
    let parser = ParserBuilder::new()
        .with_registry(Arc::clone(&registry))
        .build();

    let swapper = {
        let registry = Arc::clone(&registry);
        thread::spawn(move || {
            for round in 0..500 {
                if round % 2 == 0 {
                    registry
                        .register(1, Arc::new(RawDecoder::new()))
                        .expect("type id in range");
                } else {
                    registry
                        .register(1, Arc::new(MessageKind::PositionReportScheduled))
                        .expect("type id in range");
                }
            }
        })
    };

    for _ in 0..500 {
        // Either binding decodes the payload; neither may fail
        let message = parser.parse_payload(CLASS_A, 0).expect("a decoder is always bound");
        assert_eq!(message.source_id(), 265547250);
    }
    swapper.join().expect("swapper completes");
}

#[test]
fn unregistered_type_fails_explicitly() {
    let registry = Arc::new(MessageRegistry::with_builtin_types());
    let parser = Parser::new(Arc::clone(&registry));

    assert_eq!(registry.unregister(&MessageKind::LongRangeBroadcast), 1);
    assert_eq!(
        parser.parse_payload(LONG_RANGE, 0).unwrap_err(),
        ParseError::UnsupportedType(27)
    );
}

#[test]
fn unregister_count_ignores_concurrent_registrations() {
    for _ in 0..200 {
        let registry = Arc::new(MessageRegistry::new());
        for type_id in 0..8u8 {
            registry
                .register(type_id, Arc::new(RawDecoder::new()))
                .expect("type id in range");
        }

        let barrier = Arc::new(Barrier::new(2));
        let writer = {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for type_id in 10..60u8 {
                    registry
                        .register(type_id, Arc::new(MessageKind::BaseStationReport))
                        .expect("type id in range");
                }
            })
        };

        barrier.wait();
        assert_eq!(registry.unregister(&RawDecoder::new()), 8);
        writer.join().expect("writer completes");

        assert_eq!(registry.len(), 50);
        assert!((0..8u8).all(|type_id| !registry.has(type_id)));
    }
}
