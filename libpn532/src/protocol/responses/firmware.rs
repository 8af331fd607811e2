// libpn532-rs/libpn532/src/protocol/responses/firmware.rs

use crate::constants::PN532_FIRMWARE_PREFIX;
use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode a GetFirmwareVersion response (response code = 0x03)
/// Layout: prefix(6) + code(1) + ic(1) + ver(1) + rev(1) + support(1)
///
/// Only the six prefix bytes are verified; the response code byte is
/// not checked.
pub fn decode_firmware_version(raw: &[u8]) -> Result<FirmwareVersion> {
    parser::expect_prefix(raw, &PN532_FIRMWARE_PREFIX)?;
    parser::ensure_len(raw, 11)?;

    Ok(FirmwareVersion {
        ic: raw[7],
        ver: raw[8],
        rev: raw[9],
        support: raw[10],
    })
}
