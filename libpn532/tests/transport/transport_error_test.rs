#[path = "../common/mod.rs"]
mod common;

use libpn532::test_support::{ack_frame, firmware_response};
use libpn532::{Error, ErrorKind};

#[test]
fn read_failure_surfaces_and_link_recovers() {
    let (mock, _clock, mut dev) = common::mock_device();

    // ACK read fails on the bus
    mock.push_read_error("nak");
    let err = dev.firmware_version().unwrap_err();
    assert!(matches!(err, Error::Bus(_)));
    assert_eq!(err.kind(), ErrorKind::LinkIntegrity);

    // Next exchange works without any reset
    mock.push_read(ack_frame());
    mock.push_read(firmware_response(0x32, 1, 6, 7));
    assert_eq!(dev.firmware_version().unwrap().rev, 6);
}

#[test]
fn truncated_response_is_invalid_length() {
    let (mock, _clock, mut dev) = common::mock_device();
    mock.push_read(ack_frame());
    mock.push_read(vec![0x00, 0x00, 0xFF, 0x06]);

    assert!(matches!(
        dev.firmware_version(),
        Err(Error::InvalidLength {
            expected: 13,
            actual: 4
        })
    ));
}
