// libpn532-rs/libpn532/src/card/operations/read.rs

use log::debug;

use crate::constants::{CARD_EXCHANGE_TIMEOUT, MIFARE_BLOCK_SIZE};
use crate::device::{Device, Initialized};
use crate::protocol::commands::encode_mifare_read;
use crate::protocol::parser;
use crate::types::BlockData;
use crate::{Error, Result};

use super::block_address;

/// Read one 16-byte block. The sector must already be authenticated.
pub fn read_block(device: &mut Device<Initialized>, block: u16) -> Result<BlockData> {
    let addr = block_address(block)?;
    let cmd = encode_mifare_read(addr);

    let resp = device.data_exchange(&cmd, CARD_EXCHANGE_TIMEOUT)?;
    if !resp.is_ok() {
        return Err(Error::ReadFailed {
            block,
            status: resp.status,
        });
    }

    let data = BlockData::try_from(parser::slice_at(&resp.data, 0, MIFARE_BLOCK_SIZE)?)?;
    debug!("block {}: {}", block, data.to_hex());
    Ok(data)
}
