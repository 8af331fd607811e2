// libpn532-rs/libpn532/src/prelude.rs

pub use crate::card::{BlockOutcome, BlockReport, KeyPolicy, MifareClassic, walk_blocks};
pub use crate::device::{Device, DeviceBuilder, Initialized, Uninitialized};
pub use crate::protocol::{Command, ExchangeResponse, Response, WriteAck};
pub use crate::transport::Transport;
pub use crate::utils::{Delay, StdDelay};
pub use crate::{
    BlockData, CardType, Error, ErrorKind, FirmwareVersion, KeyType, MifareKey, PassiveTarget,
    Result, Uid, WaitStage,
};

// Re-export small utilities for convenience
pub use crate::utils::{WAIT_FOREVER, bytes_to_hex, bytes_to_hex_spaced, hex_dump, ms};
