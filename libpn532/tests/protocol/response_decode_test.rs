#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libpn532::protocol::responses::{
    Response, decode_data_exchange, decode_firmware_version, decode_passive_target,
};
use libpn532::types::CardType;
use libpn532::{Error, ErrorKind};

#[test]
fn canned_firmware_response() {
    let v = decode_firmware_version(&fixtures::firmware_frame()).unwrap();
    assert_eq!(v.ic, 0x32);
    assert_eq!(v.ver, 1);
    assert_eq!(v.rev, 6);
    assert_eq!(v.support, 7);
}

#[test]
fn firmware_prefix_mismatch_is_chip_status() {
    let mut raw = fixtures::firmware_frame();
    raw[3] = 0x07;
    let err = decode_firmware_version(&raw).unwrap_err();
    assert!(matches!(err, Error::UnexpectedPrefix { .. }));
    assert_eq!(err.kind(), ErrorKind::ChipStatus);
}

#[test]
fn passive_target_counts() {
    let target = decode_passive_target(&fixtures::one_target_frame(), CardType::TypeA).unwrap();
    assert_eq!(target.uid, fixtures::sample_uid());

    assert!(matches!(
        decode_passive_target(&fixtures::no_target_frame(), CardType::TypeA),
        Err(Error::TargetCount { found: 0 })
    ));
    assert!(matches!(
        decode_passive_target(&fixtures::two_target_frame(), CardType::TypeA),
        Err(Error::TargetCount { found: 2 })
    ));
}

#[test]
fn seven_byte_uid() {
    let uid = [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66];
    let raw = libpn532::test_support::passive_target_response(0x0044, 0x00, &uid);
    let target = decode_passive_target(&raw, CardType::TypeA).unwrap();
    assert_eq!(target.uid.as_bytes(), &uid);
    assert_eq!(target.sens_res, 0x0044);
    assert!(!target.uid.is_mifare_classic());
}

#[test]
fn exchange_dispatch() {
    let raw = fixtures::block_frame(&[0x5A; 16]);
    let direct = decode_data_exchange(&raw).unwrap();
    match Response::decode(0x40, &raw).unwrap() {
        Response::DataExchange(resp) => assert_eq!(resp, direct),
        other => panic!("unexpected response: {:?}", other),
    }
    assert_eq!(direct.data, vec![0x5A; 16]);
}
