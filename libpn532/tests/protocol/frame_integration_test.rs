#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::Frame;
use proptest::prelude::*;

#[test]
fn firmware_query_frame_matches_capture() {
    let frame = Frame::encode(&[0x02]).unwrap();
    assert_eq!(hex::encode(frame), "0000ff02fed4022a00");
}

#[test]
fn sam_configuration_frame_matches_capture() {
    let frame = Frame::encode(&[0x14, 0x01, 0x14, 0x01]).unwrap();
    assert_eq!(hex::encode(frame), "0000ff05fbd4140114010200");
}

#[test]
fn empty_payload_frame() {
    let frame = Frame::encode(&[]).unwrap();
    assert_eq!(frame, vec![0x00, 0x00, 0xFF, 0x01, 0xFF, 0xD4, 0x2C, 0x00]);
}

#[test]
fn captured_response_header() {
    let frame = common::fixtures::firmware_frame();
    let header = Frame::decode_header(&frame).unwrap();
    assert_eq!(header.length, 6);
    assert_eq!(header.direction, 0xD5);
}

#[test]
fn ack_is_shorter_than_any_response_header() {
    let ack = hex::decode("0000ff00ff00").unwrap();
    assert!(Frame::is_ack(&ack));
    assert!(matches!(
        Frame::decode_header(&ack),
        Err(Error::InvalidLength { .. })
    ));
}

proptest! {
    #[test]
    fn frame_length_is_payload_plus_overhead(payload in prop::collection::vec(any::<u8>(), 0..=254)) {
        let frame = Frame::encode(&payload).unwrap();
        prop_assert_eq!(frame.len(), payload.len() + 8);
        prop_assert_eq!(&frame[..3], &[0x00u8, 0x00, 0xFF][..]);
        prop_assert_eq!(frame[5], 0xD4);
        prop_assert_eq!(&frame[6..6 + payload.len()], payload.as_slice());
    }

    #[test]
    fn oversize_payload_rejected(len in 255usize..400) {
        let payload = vec![0u8; len];
        let rejected = matches!(Frame::encode(&payload), Err(Error::InvalidLength { .. }));
        prop_assert!(rejected);
    }
}
