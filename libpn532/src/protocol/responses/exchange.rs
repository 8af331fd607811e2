// libpn532-rs/libpn532/src/protocol/responses/exchange.rs

use crate::constants::PN532_CMD_IN_DATA_EXCHANGE;
use crate::protocol::frame::{Frame, ResponseHeader};
use crate::protocol::parser;
use crate::Result;

/// Decoded InDataExchange response.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExchangeResponse {
    /// Chip status byte, 0x00 on success
    pub status: u8,
    /// Bytes returned by the card
    pub data: Vec<u8>,
}

impl ExchangeResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 0
    }
}

/// Result of a MIFARE write. The status is reported as-is; a non-zero
/// value is not turned into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WriteAck {
    pub status: u8,
}

impl WriteAck {
    pub fn is_ok(&self) -> bool {
        self.status == 0
    }
}

/// Decode an InDataExchange response (response code = 0x41)
/// Layout after the header: status(1) + data(LEN - 3)
///
/// The raw buffer is a fixed-size read, so trailing bytes past the
/// frame's LEN are dropped from `data`.
pub fn decode_data_exchange(raw: &[u8]) -> Result<ExchangeResponse> {
    let header = Frame::expect_response(raw, PN532_CMD_IN_DATA_EXCHANGE)?;
    let status = parser::byte_at(raw, ResponseHeader::BODY_OFFSET)?;

    // LEN counts TFI, which sits at offset 5
    let start = ResponseHeader::BODY_OFFSET + 1;
    let end = (5 + header.length as usize).min(raw.len());
    let data = raw.get(start..end).unwrap_or_default().to_vec();

    Ok(ExchangeResponse { status, data })
}
