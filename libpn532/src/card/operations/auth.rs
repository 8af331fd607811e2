// libpn532-rs/libpn532/src/card/operations/auth.rs

use log::debug;

use crate::card::MifareClassic;
use crate::constants::CARD_EXCHANGE_TIMEOUT;
use crate::device::{Device, Initialized};
use crate::protocol::commands::encode_mifare_auth;
use crate::types::{KeyType, Uid};
use crate::{Error, Result};

use super::block_address;

/// Authenticate the sector of `block` using the key stored in `key_type`.
/// Status 0x00 is success; any other status is `AuthenticationFailed`.
pub fn authenticate_block(
    card: &MifareClassic,
    device: &mut Device<Initialized>,
    uid: &Uid,
    block: u16,
    key_type: KeyType,
) -> Result<()> {
    let addr = block_address(block)?;
    let cmd = encode_mifare_auth(addr, key_type, card.key(key_type), uid);

    let resp = device.data_exchange(&cmd, CARD_EXCHANGE_TIMEOUT)?;
    if !resp.is_ok() {
        return Err(Error::AuthenticationFailed {
            block,
            status: resp.status,
        });
    }

    debug!("block {} authenticated with {}", block, key_type);
    Ok(())
}
