// libpn532-rs/libpn532/src/protocol/commands/exchange.rs

use crate::constants::PN532_CMD_IN_DATA_EXCHANGE;

/// Encode InDataExchange command payload (PN532 command code 0x40)
/// Layout: code(1) + target(1) + data(n)
pub fn encode_in_data_exchange(target: u8, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + data.len());
    buf.push(PN532_CMD_IN_DATA_EXCHANGE);
    buf.push(target);
    buf.extend_from_slice(data);
    buf
}
