// libpn532-rs/libpn532/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::Command;
pub use frame::{Frame, ResponseHeader};
pub use responses::{ExchangeResponse, Response, WriteAck};
