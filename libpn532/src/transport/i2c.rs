// libpn532-rs/libpn532/src/transport/i2c.rs

//! I2C transport over any `embedded_hal::i2c::I2c` bus. Feature-gated
//! behind `--features i2c`. Bus configuration (frequency, pins) is the
//! caller's business; this adapter only moves bytes.

use embedded_hal::i2c::I2c;

use crate::constants::PN532_I2C_ADDRESS;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// PN532 over I2C. Every data read from the chip is preceded by the ready
/// byte, which this adapter strips so callers only see frame bytes.
#[derive(Debug)]
pub struct I2cTransport<I> {
    bus: I,
    address: u8,
}

impl<I: I2c> I2cTransport<I> {
    /// Use the default PN532 address (0x24).
    pub fn new(bus: I) -> Self {
        Self::with_address(bus, PN532_I2C_ADDRESS)
    }

    pub fn with_address(bus: I, address: u8) -> Self {
        Self { bus, address }
    }

    /// Give the bus back.
    pub fn release(self) -> I {
        self.bus
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> Error {
    Error::Bus(format!("i2c: {:?}", e.kind()))
}

impl<I: I2c> Transport for I2cTransport<I> {
    fn transact(&mut self, write: &[u8], read_len: usize) -> Result<Vec<u8>> {
        if !write.is_empty() {
            self.bus.write(self.address, write).map_err(bus_error)?;
        }
        if read_len == 0 {
            return Ok(Vec::new());
        }

        let mut buf = vec![0u8; read_len + 1];
        self.bus.read(self.address, &mut buf).map_err(bus_error)?;
        buf.remove(0);
        Ok(buf)
    }

    fn probe_status(&mut self) -> Result<u8> {
        let mut status = [0u8; 1];
        self.bus.read(self.address, &mut status).map_err(bus_error)?;
        Ok(status[0])
    }
}
