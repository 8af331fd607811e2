// libpn532-rs/libpn532/src/protocol/commands/mifare.rs

//! MIFARE Classic sub-commands. Each builder returns the full
//! InDataExchange command for target 1.

use crate::constants::{MIFARE_CMD_READ, MIFARE_CMD_WRITE};
use crate::protocol::commands::Command;
use crate::types::{BlockData, KeyType, MifareKey, Uid};

/// Logical number of the single target this driver talks to
pub const MIFARE_TARGET: u8 = 1;

/// Authenticate `block` with the given key slot.
/// Data layout: auth(1) + block(1) + key(6) + uid(n)
pub fn encode_mifare_auth(block: u8, key_type: KeyType, key: &MifareKey, uid: &Uid) -> Command {
    let mut data = Vec::with_capacity(2 + key.as_bytes().len() + uid.len());
    data.push(key_type.auth_command());
    data.push(block);
    data.extend_from_slice(key.as_bytes());
    data.extend_from_slice(uid.as_bytes());
    Command::InDataExchange {
        target: MIFARE_TARGET,
        data,
    }
}

/// Read one 16-byte block.
pub fn encode_mifare_read(block: u8) -> Command {
    Command::InDataExchange {
        target: MIFARE_TARGET,
        data: vec![MIFARE_CMD_READ, block],
    }
}

/// Write one 16-byte block.
pub fn encode_mifare_write(block: u8, data: &BlockData) -> Command {
    let mut buf = Vec::with_capacity(2 + data.as_bytes().len());
    buf.push(MIFARE_CMD_WRITE);
    buf.push(block);
    buf.extend_from_slice(data.as_bytes());
    Command::InDataExchange {
        target: MIFARE_TARGET,
        data: buf,
    }
}
