// libpn532-rs/libpn532/src/card/walk.rs

//! Sector-by-sector dump of a MIFARE Classic card.

use log::{debug, trace, warn};

use crate::Error;
use crate::card::{MifareClassic, sector};
use crate::device::{Device, Initialized};
use crate::types::{BlockData, KeyType, Uid};
use crate::utils::hex_dump;

/// Which key slot to authenticate each sector with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Key A for sector 0, key B for every other sector. Matches cards
    /// personalised with transport keys.
    #[default]
    FactoryDefault,
    Always(KeyType),
}

impl KeyPolicy {
    pub fn key_for_sector(self, sector: u16) -> KeyType {
        match self {
            KeyPolicy::FactoryDefault if sector == 0 => KeyType::A,
            KeyPolicy::FactoryDefault => KeyType::B,
            KeyPolicy::Always(key_type) => key_type,
        }
    }
}

#[derive(Debug)]
pub enum BlockOutcome {
    Read(BlockData),
    /// The sector could not be authenticated
    Skipped,
    ReadFailed(Error),
}

#[derive(Debug)]
pub struct BlockReport {
    pub block: u16,
    pub sector: u16,
    pub outcome: BlockOutcome,
}

impl BlockReport {
    pub fn data(&self) -> Option<&BlockData> {
        match &self.outcome {
            BlockOutcome::Read(data) => Some(data),
            _ => None,
        }
    }
}

/// Authenticate and read `blocks` in order, one report per block.
///
/// Authentication happens on the first block of each sector reached.
/// A sector that fails to authenticate has all its blocks skipped; a
/// failed read is reported and the walk moves on. Nothing is retried.
pub fn walk_blocks<I>(
    device: &mut Device<Initialized>,
    card: &MifareClassic,
    uid: &Uid,
    blocks: I,
    policy: KeyPolicy,
) -> Vec<BlockReport>
where
    I: IntoIterator<Item = u16>,
{
    let mut reports = Vec::new();
    let mut authenticated = false;
    let mut current_sector = None;

    for block in blocks {
        let sector = sector::sector_of(block);

        // A walk may start mid-sector; treat the first block seen of a
        // sector like its first block.
        if sector::is_first_block(block) || current_sector != Some(sector) {
            current_sector = Some(sector);
            let key_type = policy.key_for_sector(sector);
            authenticated = match card.authenticate_block(device, uid, block, key_type) {
                Ok(()) => true,
                Err(e) => {
                    warn!("sector {}: {}", sector, e);
                    false
                }
            };
        }

        let outcome = if !authenticated {
            BlockOutcome::Skipped
        } else {
            match card.read_block(device, block) {
                Ok(data) => {
                    trace!("block {}\n{}", block, hex_dump(data.as_bytes()));
                    BlockOutcome::Read(data)
                }
                Err(e) => {
                    warn!("block {}: {}", block, e);
                    BlockOutcome::ReadFailed(e)
                }
            }
        };
        reports.push(BlockReport {
            block,
            sector,
            outcome,
        });
    }

    debug!(
        "walk finished: {} of {} blocks read",
        reports.iter().filter(|r| r.data().is_some()).count(),
        reports.len()
    );
    reports
}
