// libpn532-rs/libpn532/src/protocol/commands/mod.rs

pub mod exchange;
pub mod firmware;
pub mod mifare;
pub mod passive;
pub mod sam;

pub use exchange::encode_in_data_exchange;
pub use firmware::encode_get_firmware_version;
pub use mifare::{encode_mifare_auth, encode_mifare_read, encode_mifare_write};
pub use passive::encode_in_list_passive_target;
pub use sam::encode_sam_configuration;

use crate::constants::{
    AUTH_RESPONSE_LEN, BLOCK_RESPONSE_LEN, FIRMWARE_RESPONSE_LEN, MIFARE_CMD_AUTH_A,
    MIFARE_CMD_AUTH_B, PASSIVE_TARGET_RESPONSE_LEN, PN532_CMD_GET_FIRMWARE_VERSION,
    PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_LIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION,
    SAM_RESPONSE_LEN,
};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: u8,
        /// Virtual card timeout in units of 50 ms
        timeout: u8,
        use_irq: bool,
    },
    InListPassiveTarget {
        max_targets: u8,
        card_type: crate::types::CardType,
    },
    InDataExchange {
        target: u8,
        data: Vec<u8>,
    },
}

impl Command {
    /// Return the PN532 command code.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => encode_get_firmware_version(),
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => encode_sam_configuration(*mode, *timeout, *use_irq),
            Self::InListPassiveTarget {
                max_targets,
                card_type,
            } => encode_in_list_passive_target(*max_targets, *card_type),
            Self::InDataExchange { target, data } => encode_in_data_exchange(*target, data),
        }
    }

    /// Number of bytes read back for the response frame. The chip keeps
    /// responses in a fixed-size buffer; reading a known length per
    /// command avoids a second length-probing transaction.
    pub fn response_len(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => FIRMWARE_RESPONSE_LEN,
            Self::SamConfiguration { .. } => SAM_RESPONSE_LEN,
            Self::InListPassiveTarget { .. } => PASSIVE_TARGET_RESPONSE_LEN,
            Self::InDataExchange { data, .. } => match data.first() {
                Some(&MIFARE_CMD_AUTH_A) | Some(&MIFARE_CMD_AUTH_B) => AUTH_RESPONSE_LEN,
                _ => BLOCK_RESPONSE_LEN,
            },
        }
    }
}
