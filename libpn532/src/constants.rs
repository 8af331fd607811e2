// libpn532-rs/libpn532/src/constants.rs
//! Common protocol constants used across the crate

use std::time::Duration;

/// PN532 frame preamble
pub const PN532_PREAMBLE: u8 = 0x00;

/// PN532 start code: 0x00 0xFF
pub const PN532_STARTCODE1: u8 = 0x00;
pub const PN532_STARTCODE2: u8 = 0xFF;

/// PN532 frame postamble
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Prefix shared by every frame the chip emits (preamble + start code)
pub const PN532_FRAME_PREFIX: [u8; 3] = [PN532_PREAMBLE, PN532_STARTCODE1, PN532_STARTCODE2];

/// Host->PN532 (D4) and PN532->host (D5) frame identifiers
pub const PN532_HOST_TO_PN532: u8 = 0xD4;
pub const PN532_PN532_TO_HOST: u8 = 0xD5;

/// Maximum payload of a normal information frame. LEN counts the TFI byte
/// as well, so one byte of the 255 is reserved.
pub const PN532_MAX_PAYLOAD_LEN: usize = 254;

/// Frame overhead around the payload:
/// preamble(1) + start code(2) + len(1) + lcs(1) + tfi(1) + dcs(1) + postamble(1)
pub const PN532_FRAME_OVERHEAD: usize = 8;

/// ACK frame the chip sends after receiving a well-formed command
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Expected start of a GetFirmwareVersion response:
/// prefix + LEN(6) + LCS(0xFA) + TFI(D5)
pub const PN532_FIRMWARE_PREFIX: [u8; 6] = [0x00, 0x00, 0xFF, 0x06, 0xFA, 0xD5];

/// Status byte reported by the ready probe when a frame is available
pub const PN532_I2C_READY: u8 = 0x01;

/// Default 7-bit I2C address of the PN532
pub const PN532_I2C_ADDRESS: u8 = 0x24;

/// PN532 command codes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// MIFARE Classic sub-commands carried inside InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

/// MIFARE Classic block size in bytes
pub const MIFARE_BLOCK_SIZE: usize = 16;

/// MIFARE Classic key size in bytes
pub const MIFARE_KEY_SIZE: usize = 6;

/// Factory default key stored in both key slots of a blank card
pub const MIFARE_FACTORY_KEY: [u8; MIFARE_KEY_SIZE] = [0xFF; MIFARE_KEY_SIZE];

/// Blocks below this address use 4-block sectors, the rest 16-block sectors
pub const MIFARE_LARGE_SECTOR_START: u16 = 128;

/// Interval between two ready probes
pub const READY_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Settle delay between bus phases of one exchange
pub const SETTLE_DELAY: Duration = Duration::from_millis(1);

/// Time the chip needs to commit a MIFARE write after acknowledging it
pub const WRITE_COMMIT_DELAY: Duration = Duration::from_millis(10);

/// Delay before the first command after power-up
pub const STARTUP_DELAY: Duration = Duration::from_millis(10);

/// Timeout used for fixed-latency chip commands
pub const COMMAND_TIMEOUT: Duration = Duration::from_millis(100);

/// Timeout used for MIFARE card exchanges
pub const CARD_EXCHANGE_TIMEOUT: Duration = Duration::from_millis(100);

/// Fixed response buffer sizes read after each command
pub const FIRMWARE_RESPONSE_LEN: usize = 13;
pub const SAM_RESPONSE_LEN: usize = 9;
pub const PASSIVE_TARGET_RESPONSE_LEN: usize = 20;
pub const AUTH_RESPONSE_LEN: usize = 12;
pub const BLOCK_RESPONSE_LEN: usize = 26;
