// libpn532-rs/libpn532/src/protocol/commands/passive.rs

use crate::constants::PN532_CMD_IN_LIST_PASSIVE_TARGET;
use crate::types::CardType;

/// Encode InListPassiveTarget command payload (PN532 command code 0x4A).
/// The chip handles at most two targets; this driver always asks for one.
pub fn encode_in_list_passive_target(max_targets: u8, card_type: CardType) -> Vec<u8> {
    vec![PN532_CMD_IN_LIST_PASSIVE_TARGET, max_targets, card_type.brty()]
}
