// libpn532-rs/libpn532/src/protocol/commands/sam.rs

use crate::constants::PN532_CMD_SAM_CONFIGURATION;

/// Normal mode: the SAM is not used
pub const SAM_MODE_NORMAL: u8 = 0x01;

/// Virtual card timeout of 20 * 50 ms = 1 s
pub const SAM_DEFAULT_TIMEOUT: u8 = 0x14;

/// Encode SAMConfiguration command payload (PN532 command code 0x14)
/// Layout: code(1) + mode(1) + timeout(1) + irq(1)
pub fn encode_sam_configuration(mode: u8, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![PN532_CMD_SAM_CONFIGURATION, mode, timeout, use_irq as u8]
}
