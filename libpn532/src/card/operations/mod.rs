// libpn532-rs/libpn532/src/card/operations/mod.rs

pub mod auth;
pub mod read;
pub mod write;

pub use auth::authenticate_block;
pub use read::read_block;
pub use write::write_block;

use crate::{Error, Result};

/// Block numbers travel as a single byte on the wire.
pub(crate) fn block_address(block: u16) -> Result<u8> {
    u8::try_from(block).map_err(|_| Error::BlockOutOfRange { block })
}
