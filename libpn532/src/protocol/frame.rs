// libpn532-rs/libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK, PN532_FRAME_OVERHEAD, PN532_FRAME_PREFIX, PN532_HOST_TO_PN532,
    PN532_MAX_PAYLOAD_LEN, PN532_PN532_TO_HOST, PN532_POSTAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::protocol::parser;
use crate::{Error, Result};

/// PN532 frame helper. Provides encoding of host frames and header
/// decoding of chip frames.
/// Format: [Preamble(1)] [StartCode(2)] [Len(1)] [LCS(1)] [TFI(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00, StartCode: 0x00 0xFF, Postamble: 0x00
pub struct Frame;

/// Fields common to every response frame, read at fixed offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseHeader {
    /// LEN byte (TFI + response payload)
    pub length: u8,
    /// Frame identifier, 0xD5 for chip-to-host frames
    pub direction: u8,
    /// Response code (command code + 1)
    pub command: u8,
}

impl ResponseHeader {
    /// Offset of the first byte following the response code
    pub const BODY_OFFSET: usize = 7;
}

impl Frame {
    /// Encode a command payload (command code + params) into a full
    /// host-to-chip frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + 1) as u8;
        let mut out = Vec::with_capacity(PN532_FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&PN532_FRAME_PREFIX);
        out.push(len);
        out.push(lcs(len));
        out.push(PN532_HOST_TO_PN532);
        out.extend_from_slice(payload);
        out.push(dcs(PN532_HOST_TO_PN532, payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// True iff `frame` is exactly the 6-byte ACK frame.
    pub fn is_ack(frame: &[u8]) -> bool {
        frame == PN532_ACK
    }

    /// Read the header fields of a chip-to-host frame. Checksums are not
    /// verified; a buffer shorter than the header is `InvalidLength`.
    pub fn decode_header(frame: &[u8]) -> Result<ResponseHeader> {
        parser::ensure_len(frame, ResponseHeader::BODY_OFFSET)?;

        if frame[..PN532_FRAME_PREFIX.len()] != PN532_FRAME_PREFIX {
            return Err(Error::FrameFormat("invalid preamble".into()));
        }

        let direction = parser::byte_at(frame, 5)?;
        if direction != PN532_PN532_TO_HOST {
            return Err(Error::FrameFormat(format!(
                "invalid frame identifier {:#04x}",
                direction
            )));
        }

        Ok(ResponseHeader {
            length: parser::byte_at(frame, 3)?,
            direction,
            command: parser::byte_at(frame, 6)?,
        })
    }

    /// Decode the header and check that the frame answers `command`.
    pub fn expect_response(frame: &[u8], command: u8) -> Result<ResponseHeader> {
        let header = Self::decode_header(frame)?;
        let expected = command.wrapping_add(1);
        if header.command != expected {
            return Err(Error::UnexpectedResponse {
                expected,
                actual: header.command,
            });
        }
        Ok(header)
    }
}
