// libpn532-rs/libpn532/src/protocol/responses/sam.rs

use crate::constants::PN532_CMD_SAM_CONFIGURATION;
use crate::protocol::frame::Frame;
use crate::Result;

/// Decode a SAMConfiguration response (response code = 0x15). The
/// response has no body; only the header is checked.
pub fn decode_sam_configuration(raw: &[u8]) -> Result<()> {
    Frame::expect_response(raw, PN532_CMD_SAM_CONFIGURATION)?;
    Ok(())
}
