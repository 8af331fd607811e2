// libpn532-rs/libpn532/src/card/mod.rs

//! MIFARE Classic access on top of the chip's InDataExchange.
//!
//! Authentication state lives on the card, not here: after a successful
//! authenticate every block of that sector can be read or written until
//! another sector is authenticated or the card leaves the field.

use crate::device::{Device, Initialized};
use crate::protocol::WriteAck;
use crate::types::{BlockData, KeyType, MifareKey, Uid};
use crate::Result;

pub mod operations;
pub mod sector;
pub mod walk;

pub use walk::{BlockOutcome, BlockReport, KeyPolicy, walk_blocks};

/// Key store plus block operations for a MIFARE Classic card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MifareClassic {
    keys: [MifareKey; 2],
}

impl MifareClassic {
    /// Both slots start with the factory key.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(key_a: MifareKey, key_b: MifareKey) -> Self {
        Self {
            keys: [key_a, key_b],
        }
    }

    pub fn set_key_a(&mut self, key: MifareKey) {
        self.set_key(KeyType::A, key);
    }

    pub fn set_key_b(&mut self, key: MifareKey) {
        self.set_key(KeyType::B, key);
    }

    pub fn set_key(&mut self, key_type: KeyType, key: MifareKey) {
        self.keys[key_type.index()] = key;
    }

    pub fn key(&self, key_type: KeyType) -> &MifareKey {
        &self.keys[key_type.index()]
    }

    pub fn is_first_block_of_sector(block: u16) -> bool {
        sector::is_first_block(block)
    }

    pub fn is_trailer_block_of_sector(block: u16) -> bool {
        sector::is_trailer_block(block)
    }

    /// Authenticate the sector containing `block` with the stored key.
    pub fn authenticate_block(
        &self,
        device: &mut Device<Initialized>,
        uid: &Uid,
        block: u16,
        key_type: KeyType,
    ) -> Result<()> {
        operations::authenticate_block(self, device, uid, block, key_type)
    }

    /// Read one block. The sector must be authenticated.
    pub fn read_block(&self, device: &mut Device<Initialized>, block: u16) -> Result<BlockData> {
        operations::read_block(device, block)
    }

    /// Write up to 16 bytes to one block; shorter data is zero-padded.
    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        block: u16,
        data: &[u8],
    ) -> Result<WriteAck> {
        operations::write_block(device, block, data)
    }
}
