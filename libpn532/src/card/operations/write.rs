// libpn532-rs/libpn532/src/card/operations/write.rs

use log::{debug, warn};

use crate::constants::{CARD_EXCHANGE_TIMEOUT, MIFARE_BLOCK_SIZE, WRITE_COMMIT_DELAY};
use crate::device::{Device, Initialized};
use crate::protocol::WriteAck;
use crate::protocol::commands::encode_mifare_write;
use crate::types::BlockData;
use crate::{Error, Result};

use super::block_address;

/// Write one block. Data longer than 16 bytes is rejected before any bus
/// activity; shorter data is zero-padded.
///
/// The status byte of the response is returned as-is in the
/// [`WriteAck`]. A non-zero status is logged, not turned into an error.
pub fn write_block(device: &mut Device<Initialized>, block: u16, data: &[u8]) -> Result<WriteAck> {
    if data.len() > MIFARE_BLOCK_SIZE {
        return Err(Error::OversizeBlock { len: data.len() });
    }
    let addr = block_address(block)?;

    let mut padded = [0u8; MIFARE_BLOCK_SIZE];
    padded[..data.len()].copy_from_slice(data);
    let cmd = encode_mifare_write(addr, &BlockData::from_bytes(padded));

    let resp = device.data_exchange_with_hold(&cmd, CARD_EXCHANGE_TIMEOUT, WRITE_COMMIT_DELAY)?;
    let ack = WriteAck {
        status: resp.status,
    };
    if ack.is_ok() {
        debug!("block {} written", block);
    } else {
        warn!("block {} write reported status {:#04x}", block, ack.status);
    }
    Ok(ack)
}
