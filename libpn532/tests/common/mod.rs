// Shared helpers for integration tests.
#![allow(dead_code)]

#[path = "fixtures.rs"]
pub mod fixtures;

use libpn532::device::{Device, Initialized};
use libpn532::test_support::{self, MockDelay};
use libpn532::transport::mock::MockTransport;

/// Route `log` output through the test harness. Safe to call from every
/// test; only the first call installs the logger.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Mock transport, simulated clock and an initialized device sharing them.
pub fn mock_device() -> (MockTransport, MockDelay, Device<Initialized>) {
    init_logger();
    let mock = MockTransport::new();
    let clock = MockDelay::new();
    let dev = test_support::initialized_mock_device(&mock, &clock).expect("initialize");
    (mock, clock, dev)
}
