#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder};
use libpn532::test_support::{MockDelay, sam_response, script_exchange};
use libpn532::transport::mock::MockTransport;

#[test]
fn initialize_transitions_and_reports_firmware() -> anyhow::Result<()> {
    common::init_logger();
    let mock = MockTransport::new();
    let clock = MockDelay::new();

    script_exchange(&mock, common::fixtures::firmware_frame());
    script_exchange(&mock, sam_response());

    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_delay(Box::new(clock.clone()))
        .build_uninitialized()?;

    // Uninitialized device can already answer the firmware query
    let version = device.firmware_version()?;
    assert_eq!(version.to_string(), "PN532 firmware 1.6, support 0x07");

    // Transition to initialized
    let mut initialized = device.initialize()?;
    assert_eq!(mock.writes().len(), 2);

    script_exchange(&mock, common::fixtures::firmware_frame());
    assert_eq!(initialized.firmware_version()?.ic, 0x32);
    Ok(())
}

#[test]
fn initialize_waits_for_startup() {
    let mock = MockTransport::new();
    let clock = MockDelay::new();
    script_exchange(&mock, sam_response());

    let device = Device::new(Box::new(mock), Box::new(clock.clone()));
    assert!(device.initialize().is_ok());
    assert_eq!(
        clock.delays().first().copied(),
        Some(libpn532::constants::STARTUP_DELAY)
    );
}
