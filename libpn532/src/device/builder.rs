// libpn532-rs/libpn532/src/device/builder.rs

use crate::device::handle::{Device, Uninitialized};
use crate::transport::Transport;
use crate::utils::{Delay, StdDelay};
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    delay: Option<Box<dyn Delay>>,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the default thread-sleep delay.
    pub fn with_delay(mut self, delay: Box<dyn Delay>) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let delay = self.delay.unwrap_or_else(|| Box::new(StdDelay));
        Ok(Device::new(transport, delay))
    }
}
