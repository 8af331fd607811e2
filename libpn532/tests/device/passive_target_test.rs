#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use libpn532::test_support::script_exchange;
use libpn532::types::CardType;
use libpn532::utils::{WAIT_FOREVER, ms};
use libpn532::{Error, ErrorKind};

#[test]
fn single_target_uid() -> anyhow::Result<()> {
    let (mock, _clock, mut dev) = common::mock_device();
    script_exchange(&mock, fixtures::one_target_frame());

    let target = dev.read_passive_target(CardType::TypeA, ms(100))?;
    assert_eq!(target.uid, fixtures::sample_uid());
    assert_eq!(target.sens_res, 0x0004);
    assert_eq!(target.sel_res, 0x08);
    assert_eq!(target.uid.to_u32(), Some(0xDEADBEEF));
    Ok(())
}

#[test]
fn no_target_is_an_error() {
    let (mock, _clock, mut dev) = common::mock_device();
    script_exchange(&mock, fixtures::no_target_frame());

    let err = dev
        .read_passive_target_id(CardType::TypeA, ms(100))
        .unwrap_err();
    assert!(matches!(err, Error::TargetCount { found: 0 }));
    assert_eq!(err.kind(), ErrorKind::ChipStatus);
}

#[test]
fn two_targets_is_an_error() {
    let (mock, _clock, mut dev) = common::mock_device();
    script_exchange(&mock, fixtures::two_target_frame());

    assert!(matches!(
        dev.read_passive_target_id(CardType::TypeA, ms(100)),
        Err(Error::TargetCount { found: 2 })
    ));
}

#[test]
fn wait_forever_until_card_presented() {
    let (mock, clock, mut dev) = common::mock_device();
    clock.clear();
    // ready for the ack, then the card shows up after a second
    mock.push_status(0x01);
    mock.push_not_ready(100);
    script_exchange(&mock, fixtures::one_target_frame());

    let uid = dev.read_passive_target_id(CardType::TypeA, WAIT_FOREVER).unwrap();
    assert_eq!(uid, fixtures::sample_uid());
    assert!(clock.elapsed() >= ms(1000));
}

#[test]
fn detected_target_can_be_read_separately() {
    let (mock, _clock, mut dev) = common::mock_device();
    mock.push_read(fixtures::one_target_frame());

    let target = dev.read_detected_passive_target(CardType::TypeA).unwrap();
    assert_eq!(target.target_number, 1);
}

#[test]
fn felica_target_is_reported_as_unsupported() {
    let (mock, _clock, mut dev) = common::mock_device();
    script_exchange(&mock, fixtures::felica_target_frame());

    let err = dev
        .read_passive_target_id(CardType::FeliCa212, ms(100))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedTarget { brty: 0x01 }));
    assert_eq!(err.kind(), ErrorKind::ChipStatus);
}

#[test]
fn felica_command_carries_brty() {
    let (mock, _clock, mut dev) = common::mock_device();
    script_exchange(&mock, fixtures::felica_target_frame());

    let _ = dev.read_passive_target(CardType::FeliCa212, ms(100));
    let frame = mock.last_write().unwrap();
    // D4 4A max_tg brty
    assert_eq!(&frame[5..9], &[0xD4, 0x4A, 0x01, 0x01]);
}
