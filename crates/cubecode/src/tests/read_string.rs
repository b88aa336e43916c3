use rstest::rstest;

use crate::{DecodeError, Packet, SanitizeOptions};

#[test]
fn ascii_string() {
    let mut packet = Packet::new(b"Hi\0rest");
    assert_eq!(packet.read_string().as_deref(), Ok("Hi"));
    assert_eq!(packet.position(), 3);
    assert_eq!(packet.remaining_bytes(), b"rest");
}

#[test]
fn empty_string() {
    let mut packet = Packet::new(&[0x00, 0x00]);
    assert_eq!(packet.read_string().as_deref(), Ok(""));
    assert_eq!(packet.read_string().as_deref(), Ok(""));
    assert!(!packet.has_remaining());
}

#[test]
fn consecutive_strings() {
    let mut packet = Packet::new(b"map\0complex\0");
    assert_eq!(packet.read_string().as_deref(), Ok("map"));
    assert_eq!(packet.read_string().as_deref(), Ok("complex"));
}

#[test]
fn maps_through_charset() {
    // 0x01 is À, 0xce is Є, 0xff is ґ
    let mut packet = Packet::new(&[0x01, 0xce, 0xff, 0x00]);
    assert_eq!(packet.read_string().as_deref(), Ok("ÀЄґ"));
}

#[test]
fn wide_ints_keep_low_byte() {
    // 0x0141 truncates to 'A', 0x1234_5662 truncates to 'b'
    let mut packet = Packet::new(&[0x80, 0x41, 0x01, 0x81, 0x62, 0x56, 0x34, 0x12, 0x00]);
    assert_eq!(packet.read_string().as_deref(), Ok("Ab"));
}

#[rstest]
#[case::i16_zero(&[b'x', 0x80, 0x00, 0x00, b'y'])]
#[case::i32_zero(&[b'x', 0x81, 0x00, 0x00, 0x00, 0x00, b'y'])]
fn escaped_zero_terminates(#[case] bytes: &[u8]) {
    let mut packet = Packet::new(bytes);
    assert_eq!(packet.read_string().as_deref(), Ok("x"));
    assert_eq!(packet.remaining_bytes(), b"y");
}

#[test]
fn low_byte_zero_does_not_terminate() {
    // 0x0100 is not 0 even though its low byte is, so it decodes to NUL
    let mut packet = Packet::new(&[b'a', 0x80, 0x00, 0x01, b'b', 0x00]);
    assert_eq!(packet.read_string().as_deref(), Ok("a\0b"));
}

#[test]
fn colour_escapes_survive_decoding() {
    let mut packet = Packet::new(b"\x0c3red\x0c7\0");
    assert_eq!(packet.read_string().as_deref(), Ok("\x0c3red\x0c7"));
}

#[test]
fn missing_terminator_overreads() {
    let mut packet = Packet::new(b"abc");
    assert_eq!(
        packet.read_string(),
        Err(DecodeError::Overread { position: 3 })
    );
    assert_eq!(packet.position(), 3);
}

#[test]
fn empty_packet_string_is_too_short() {
    assert_eq!(
        Packet::new(&[]).read_string(),
        Err(DecodeError::BufferTooShort)
    );
}

#[test]
fn sanitized_string() {
    let mut packet = Packet::new(b" \x0c2name\0\x0c0a\0b\0");
    assert_eq!(
        packet.read_sanitized_string(SanitizeOptions::default()).as_deref(),
        Ok("name")
    );
    assert_eq!(
        packet.read_sanitized_string(SanitizeOptions::STRIP_NUL).as_deref(),
        Ok("a")
    );
    assert_eq!(
        packet.read_sanitized_string(SanitizeOptions::STRIP_NUL).as_deref(),
        Ok("b")
    );
}
