use rstest::rstest;

use crate::{DecodeError, Packet};

#[rstest]
#[case::zero(&[0x00], 0, 1)]
#[case::max_positive_byte(&[0x7f], 127, 1)]
#[case::minus_one(&[0xff], -1, 1)]
#[case::min_single_byte(&[0x82], -126, 1)]
#[case::i16_minus_one(&[0x80, 0xff, 0xff], -1, 3)]
#[case::i16_min(&[0x80, 0x00, 0x80], -32768, 3)]
#[case::i16_max(&[0x80, 0xff, 0x7f], 32767, 3)]
#[case::i16_small(&[0x80, 0xe8, 0x03], 1000, 3)]
#[case::i32_minus_one(&[0x81, 0xff, 0xff, 0xff, 0xff], -1, 5)]
#[case::i32_min(&[0x81, 0x00, 0x00, 0x00, 0x80], i32::MIN, 5)]
#[case::i32_max(&[0x81, 0xff, 0xff, 0xff, 0x7f], i32::MAX, 5)]
#[case::i32_little_endian(&[0x81, 0x01, 0x02, 0x03, 0x04], 0x0403_0201, 5)]
fn decodes_each_width(#[case] bytes: &[u8], #[case] expected: i32, #[case] consumed: usize) {
    let mut packet = Packet::new(bytes);
    assert_eq!(packet.read_int(), Ok(expected));
    assert_eq!(packet.position(), consumed);
}

#[test]
fn trailing_bytes_are_left_unread() {
    let mut packet = Packet::new(&[0x80, 0x01, 0x00, 0x05, 0xfe]);
    assert_eq!(packet.read_int(), Ok(1));
    assert_eq!(packet.read_int(), Ok(5));
    assert_eq!(packet.read_int(), Ok(-2));
    assert!(!packet.has_remaining());
}

#[test]
fn empty_buffer_is_too_short() {
    let mut packet = Packet::new(&[]);
    assert_eq!(packet.read_int(), Err(DecodeError::BufferTooShort));
    assert_eq!(packet.position(), 0);
}

#[test]
fn exhausted_buffer_overreads() {
    let mut packet = Packet::new(&[0x05]);
    assert_eq!(packet.read_int(), Ok(5));
    assert_eq!(
        packet.read_int(),
        Err(DecodeError::Overread { position: 1 })
    );
}

#[rstest]
#[case::i16_no_payload(&[0x80], 1)]
#[case::i16_half_payload(&[0x80, 0x12], 2)]
#[case::i32_no_payload(&[0x81], 1)]
#[case::i32_three_bytes(&[0x81, 0x01, 0x02, 0x03], 4)]
fn truncated_payload_stops_after_last_byte(#[case] bytes: &[u8], #[case] position: usize) {
    let mut packet = Packet::new(bytes);
    assert_eq!(packet.read_int(), Err(DecodeError::Overread { position }));
    assert_eq!(packet.position(), position);
}
