// libpn532-rs/libpn532/src/device/link.rs

//! One command/ACK/response exchange with the chip.
//!
//! The sequence is: write the frame, wait for ready, read and check the
//! 6-byte ACK, wait for ready again. The response buffer is read
//! separately with [`Link::read_response`] so callers can hold the chip
//! between the ACK and the response (MIFARE writes need this).

use std::time::Duration;

use log::trace;

use crate::constants::{PN532_ACK, PN532_I2C_READY, READY_POLL_INTERVAL, SETTLE_DELAY};
use crate::error::WaitStage;
use crate::protocol::Frame;
use crate::transport::Transport;
use crate::utils::{Delay, bytes_to_hex_spaced, would_exceed};
use crate::{Error, Result};

/// Link controller. Owns the transport and the delay source.
pub struct Link {
    transport: Box<dyn Transport>,
    delay: Box<dyn Delay>,
}

impl Link {
    pub fn new(transport: Box<dyn Transport>, delay: Box<dyn Delay>) -> Self {
        Self { transport, delay }
    }

    /// Send `payload` (command code + params) and wait until the chip has
    /// acknowledged it and has a response ready.
    ///
    /// `timeout` bounds each of the two ready-waits separately; zero
    /// waits forever.
    pub fn send_command_check_ack(&mut self, payload: &[u8], timeout: Duration) -> Result<()> {
        let frame = Frame::encode(payload)?;
        trace!("write: {}", bytes_to_hex_spaced(&frame));
        self.transport.write(&frame)?;

        self.wait_ready(timeout, WaitStage::Ack)?;
        self.delay.delay(SETTLE_DELAY);

        self.read_ack()?;
        self.delay.delay(SETTLE_DELAY);

        self.wait_ready(timeout, WaitStage::Response)?;
        Ok(())
    }

    /// Poll the status byte every [`READY_POLL_INTERVAL`] until it reads
    /// ready. Returns the simulated time spent waiting.
    pub fn wait_ready(&mut self, timeout: Duration, stage: WaitStage) -> Result<Duration> {
        let mut waited = Duration::ZERO;
        loop {
            if self.transport.probe_status()? == PN532_I2C_READY {
                trace!("ready after {:?} ({})", waited, stage);
                return Ok(waited);
            }
            if would_exceed(waited, READY_POLL_INTERVAL, timeout) {
                trace!("no ready signal within {:?} ({})", timeout, stage);
                return Err(Error::Timeout { stage });
            }
            self.delay.delay(READY_POLL_INTERVAL);
            waited += READY_POLL_INTERVAL;
        }
    }

    fn read_ack(&mut self) -> Result<()> {
        let ack = self.transport.read(PN532_ACK.len())?;
        trace!("ack: {}", bytes_to_hex_spaced(&ack));
        if !Frame::is_ack(&ack) {
            return Err(Error::AckMismatch { actual: ack });
        }
        Ok(())
    }

    /// Read exactly `len` bytes of response buffer.
    pub fn read_response(&mut self, len: usize) -> Result<Vec<u8>> {
        let raw = self.transport.read(len)?;
        trace!("read: {}", bytes_to_hex_spaced(&raw));
        if raw.len() < len {
            return Err(Error::InvalidLength {
                expected: len,
                actual: raw.len(),
            });
        }
        Ok(raw)
    }

    /// Full exchange: send, then read `response_len` bytes.
    pub fn exchange(
        &mut self,
        payload: &[u8],
        response_len: usize,
        timeout: Duration,
    ) -> Result<Vec<u8>> {
        self.send_command_check_ack(payload, timeout)?;
        self.read_response(response_len)
    }

    /// Block for `duration` on the link's delay source.
    pub fn delay(&mut self, duration: Duration) {
        self.delay.delay(duration);
    }
}
