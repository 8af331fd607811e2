// libpn532-rs/libpn532/src/protocol/commands/firmware.rs

use crate::constants::PN532_CMD_GET_FIRMWARE_VERSION;

/// Encode GetFirmwareVersion command payload (PN532 command code 0x02)
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN532_CMD_GET_FIRMWARE_VERSION]
}
