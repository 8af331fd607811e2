// libpn532-rs/libpn532/src/protocol/responses/mod.rs

pub mod exchange;
pub mod firmware;
pub mod passive;
pub mod sam;

pub use exchange::{ExchangeResponse, WriteAck, decode_data_exchange};
pub use firmware::decode_firmware_version;
pub use passive::decode_passive_target;
pub use sam::decode_sam_configuration;

use crate::constants::{
    PN532_CMD_GET_FIRMWARE_VERSION, PN532_CMD_IN_DATA_EXCHANGE, PN532_CMD_IN_LIST_PASSIVE_TARGET,
    PN532_CMD_SAM_CONFIGURATION,
};
use crate::types::{CardType, FirmwareVersion, PassiveTarget};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here. Decoders
/// take the raw response buffer as read from the bus, starting at the
/// preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    FirmwareVersion(FirmwareVersion),
    SamConfiguration,
    PassiveTarget(PassiveTarget),
    DataExchange(ExchangeResponse),
}

impl Response {
    /// Decode a raw response buffer for the given command code.
    /// InListPassiveTarget replies are decoded as Type A targets.
    pub fn decode(expected_cmd: u8, raw: &[u8]) -> crate::Result<Self> {
        match expected_cmd {
            PN532_CMD_GET_FIRMWARE_VERSION => {
                Ok(Self::FirmwareVersion(decode_firmware_version(raw)?))
            }
            PN532_CMD_SAM_CONFIGURATION => {
                decode_sam_configuration(raw)?;
                Ok(Self::SamConfiguration)
            }
            PN532_CMD_IN_LIST_PASSIVE_TARGET => Ok(Self::PassiveTarget(decode_passive_target(
                raw,
                CardType::TypeA,
            )?)),
            PN532_CMD_IN_DATA_EXCHANGE => Ok(Self::DataExchange(decode_data_exchange(raw)?)),
            other => Err(crate::Error::FrameFormat(format!(
                "no decoder for command {:#04x}",
                other
            ))),
        }
    }
}
