#[path = "../common/mod.rs"]
mod common;

use libpn532::constants::SETTLE_DELAY;
use libpn532::device::{Device, Link};
use libpn532::test_support::{MockDelay, ack_frame, firmware_response, script_exchange};
use libpn532::transport::mock::MockTransport;
use libpn532::utils::ms;
use libpn532::{Error, ErrorKind, WaitStage};
use proptest::prelude::*;

fn link(mock: &MockTransport, clock: &MockDelay) -> Link {
    Link::new(Box::new(mock.clone()), Box::new(clock.clone()))
}

#[test]
fn three_not_ready_polls_wait_thirty_ms() {
    common::init_logger();
    let mock = MockTransport::new();
    let clock = MockDelay::new();
    mock.push_not_ready(3);

    let waited = link(&mock, &clock)
        .wait_ready(ms(100), WaitStage::Ack)
        .unwrap();
    assert_eq!(waited, ms(30));
    assert_eq!(clock.elapsed(), ms(30));
}

#[test]
fn firmware_version_after_three_not_ready_polls() {
    common::init_logger();
    let mock = MockTransport::new();
    let clock = MockDelay::new();
    mock.push_not_ready(3);
    script_exchange(&mock, firmware_response(0x32, 1, 6, 7));

    let mut dev = Device::new(Box::new(mock.clone()), Box::new(clock.clone()));
    let version = dev.firmware_version().unwrap();
    assert_eq!(version.ic, 0x32);
    assert_eq!(
        clock.delays(),
        vec![ms(10), ms(10), ms(10), SETTLE_DELAY, SETTLE_DELAY]
    );
    assert_eq!(clock.elapsed(), ms(33));
    assert_eq!(mock.pending_reads(), 0);
}

#[test]
fn timeouts_are_retryable() {
    let mock = MockTransport::new();
    let clock = MockDelay::new();
    mock.push_not_ready(100);

    let err = link(&mock, &clock)
        .send_command_check_ack(&[0x02], ms(100))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.is_retryable());
}

#[test]
fn link_is_usable_after_ack_mismatch() {
    let mock = MockTransport::new();
    let clock = MockDelay::new();
    let mut controller = link(&mock, &clock);

    mock.push_read(vec![0xFF; 6]);
    let err = controller
        .send_command_check_ack(&[0x02], ms(100))
        .unwrap_err();
    assert!(matches!(err, Error::AckMismatch { .. }));
    assert_eq!(err.kind(), ErrorKind::LinkIntegrity);
    assert!(!err.is_retryable());

    mock.push_read(ack_frame());
    controller.send_command_check_ack(&[0x02], ms(100)).unwrap();
}

proptest! {
    #[test]
    fn wait_matches_not_ready_count(n in 0usize..10) {
        let mock = MockTransport::new();
        let clock = MockDelay::new();
        mock.push_not_ready(n);
        let waited = link(&mock, &clock).wait_ready(ms(100), WaitStage::Response).unwrap();
        prop_assert_eq!(waited, ms(10 * n as u64));
        prop_assert_eq!(mock.probes(), n + 1);
    }
}
