// libpn532-rs/libpn532/src/card/sector.rs

//! Sector geometry of MIFARE Classic 1K/2K/4K.
//!
//! Blocks 0..128 form 32 sectors of 4 blocks; blocks 128..256 form 8
//! sectors of 16 blocks (4K cards only). The last block of every sector
//! is its trailer holding the keys and access bits.

use crate::constants::MIFARE_LARGE_SECTOR_START;

const SMALL_SECTOR_BLOCKS: u16 = 4;
const LARGE_SECTOR_BLOCKS: u16 = 16;
const SMALL_SECTOR_COUNT: u16 = MIFARE_LARGE_SECTOR_START / SMALL_SECTOR_BLOCKS;

/// Sectors on the largest (4K) card.
pub const SECTOR_COUNT: u16 = SMALL_SECTOR_COUNT + 8;

fn blocks_per_sector_at(block: u16) -> u16 {
    if block < MIFARE_LARGE_SECTOR_START {
        SMALL_SECTOR_BLOCKS
    } else {
        LARGE_SECTOR_BLOCKS
    }
}

pub fn is_first_block(block: u16) -> bool {
    block % blocks_per_sector_at(block) == 0
}

pub fn is_trailer_block(block: u16) -> bool {
    let n = blocks_per_sector_at(block);
    block % n == n - 1
}

/// Sector number containing `block`.
pub fn sector_of(block: u16) -> u16 {
    if block < MIFARE_LARGE_SECTOR_START {
        block / SMALL_SECTOR_BLOCKS
    } else {
        SMALL_SECTOR_COUNT + (block - MIFARE_LARGE_SECTOR_START) / LARGE_SECTOR_BLOCKS
    }
}

/// First block of `sector`, or `None` past the last sector of a 4K card.
pub fn first_block_of_sector(sector: u16) -> Option<u16> {
    if sector >= SECTOR_COUNT {
        return None;
    }
    if sector < SMALL_SECTOR_COUNT {
        sector.checked_mul(SMALL_SECTOR_BLOCKS)
    } else {
        (sector - SMALL_SECTOR_COUNT)
            .checked_mul(LARGE_SECTOR_BLOCKS)?
            .checked_add(MIFARE_LARGE_SECTOR_START)
    }
}

pub fn blocks_in_sector(sector: u16) -> u16 {
    if sector < SMALL_SECTOR_COUNT {
        SMALL_SECTOR_BLOCKS
    } else {
        LARGE_SECTOR_BLOCKS
    }
}

/// Trailer block of `sector`, or `None` past the last sector.
pub fn trailer_block_of_sector(sector: u16) -> Option<u16> {
    first_block_of_sector(sector)?.checked_add(blocks_in_sector(sector) - 1)
}
