// fixtures.rs: commonly used test payloads and frames

use libpn532::constants::{AUTH_RESPONSE_LEN, BLOCK_RESPONSE_LEN, FIRMWARE_RESPONSE_LEN};
use libpn532::test_support::{exchange_response, padded, passive_target_response, response_frame};
use libpn532::types::Uid;

pub fn sample_uid_bytes() -> [u8; 4] {
    [0xDE, 0xAD, 0xBE, 0xEF]
}

pub fn sample_uid() -> Uid {
    Uid::try_from(&sample_uid_bytes()[..]).unwrap()
}

/// GetFirmwareVersion response of a PN532 v1.6. Offset 6 reads 0x00
/// here; decoding must not depend on it.
pub fn firmware_frame() -> Vec<u8> {
    padded(
        hex::decode("0000ff06fad50032010607e8").unwrap(),
        FIRMWARE_RESPONSE_LEN,
    )
}

pub fn one_target_frame() -> Vec<u8> {
    passive_target_response(0x0004, 0x08, &sample_uid_bytes())
}

pub fn no_target_frame() -> Vec<u8> {
    padded(hex::decode("0000ff03fdd54b00e000").unwrap(), 20)
}

/// One FeliCa 212 kbps target: nb_tg, tg, POL_RES length, response
/// code 0x01, NFCID2, PAD.
pub fn felica_target_frame() -> Vec<u8> {
    let body = hex::decode("01011201012e3c0b881a4f2103014b024f4993ff").unwrap();
    response_frame(0x4B, &body)
}

pub fn two_target_frame() -> Vec<u8> {
    let mut raw = one_target_frame();
    raw[7] = 0x02;
    raw
}

pub fn auth_ok() -> Vec<u8> {
    exchange_response(0x00, &[], AUTH_RESPONSE_LEN)
}

pub fn auth_rejected() -> Vec<u8> {
    exchange_response(0x14, &[], AUTH_RESPONSE_LEN)
}

pub fn block_frame(data: &[u8; 16]) -> Vec<u8> {
    exchange_response(0x00, data, BLOCK_RESPONSE_LEN)
}

pub fn write_ok() -> Vec<u8> {
    exchange_response(0x00, &[], BLOCK_RESPONSE_LEN)
}
