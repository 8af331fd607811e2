// libpn532-rs/libpn532/src/protocol/responses/passive.rs

use crate::constants::PN532_CMD_IN_LIST_PASSIVE_TARGET;
use crate::protocol::frame::{Frame, ResponseHeader};
use crate::protocol::parser;
use crate::types::{CardType, PassiveTarget, Uid};
use crate::{Error, Result};

/// Decode an InListPassiveTarget response (response code = 0x4B) sent
/// for `card_type`.
///
/// Exactly one target is accepted. Zero targets (nothing in the field)
/// and two targets are both reported as `TargetCount`. Only 106 kbps
/// Type A target data can be decoded; a target of any other type is
/// `UnsupportedTarget`.
pub fn decode_passive_target(raw: &[u8], card_type: CardType) -> Result<PassiveTarget> {
    Frame::expect_response(raw, PN532_CMD_IN_LIST_PASSIVE_TARGET)?;

    let base = ResponseHeader::BODY_OFFSET;
    let found = parser::byte_at(raw, base)?;
    if found != 1 {
        return Err(Error::TargetCount { found });
    }

    match card_type {
        CardType::TypeA => decode_type_a(raw, base + 1),
        other => Err(Error::UnsupportedTarget { brty: other.brty() }),
    }
}

/// Type A target data: tg(1) + sens_res(2) + sel_res(1) + uid_len(1) + uid(n)
fn decode_type_a(raw: &[u8], at: usize) -> Result<PassiveTarget> {
    let target_number = parser::byte_at(raw, at)?;
    let sens_res = parser::be_u16_at(raw, at + 1)?;
    let sel_res = parser::byte_at(raw, at + 3)?;
    let uid_len = parser::byte_at(raw, at + 4)? as usize;
    let uid = Uid::try_from(parser::slice_at(raw, at + 5, uid_len)?)?;

    Ok(PassiveTarget {
        target_number,
        sens_res,
        sel_res,
        uid,
    })
}
