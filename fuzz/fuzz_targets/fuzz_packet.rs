#![no_main]

use arbitrary::Arbitrary;
use cubecode::{DecodeError, Packet, SanitizeOptions, sanitize_string_with};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Byte,
    Int,
    String,
    Sanitized { strip_nul: bool },
    SubPacket { start: usize, end: usize },
    FromCurrent,
}

#[derive(Debug, Arbitrary)]
struct Input {
    ops: Vec<Op>,
    data: Vec<u8>,
}

fn run(input: Input) {
    let mut packet = Packet::new(&input.data);
    for op in input.ops {
        let bytes = packet.as_bytes();
        let result = match op {
            Op::Byte => packet.read_byte().map(drop),
            Op::Int => packet.read_int().map(drop),
            Op::String => packet.read_string().map(drop),
            Op::Sanitized { strip_nul } => packet
                .read_sanitized_string(SanitizeOptions { strip_nul })
                .map(|s| {
                    // sanitizing is idempotent
                    let options = SanitizeOptions { strip_nul };
                    assert_eq!(sanitize_string_with(&s, options), s);
                }),
            Op::SubPacket { start, end } => packet.sub_packet(start, end).map(|sub| {
                assert_eq!(sub.as_bytes(), &bytes[start..end]);
                packet = sub;
            }),
            Op::FromCurrent => packet.sub_packet_from_current().map(|sub| packet = sub),
        };

        assert!(packet.position() <= packet.len());
        match result {
            Ok(()) | Err(DecodeError::InvalidRange { .. }) => {}
            Err(DecodeError::Overread { position }) => assert_eq!(position, packet.len()),
            Err(DecodeError::BufferTooShort) => assert!(packet.is_empty()),
        }
    }
}

fuzz_target!(|input: Input| run(input));
