//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::constants::{PN532_ACK, PN532_FRAME_PREFIX, PN532_PN532_TO_HOST, PN532_POSTAMBLE};
use crate::protocol::checksum::{dcs, lcs};
use crate::transport::mock::MockTransport;
use crate::utils::delay::Delay;
use crate::{Result, device};

/// Simulated clock. Records every requested delay instead of sleeping.
/// Clones share the record, so a test can keep one after handing the
/// other to a `Device`.
#[derive(Debug, Default, Clone)]
pub struct MockDelay {
    delays: Rc<RefCell<Vec<Duration>>>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every delay requested so far, in order.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }

    /// Sum of all requested delays.
    pub fn elapsed(&self) -> Duration {
        self.delays.borrow().iter().sum()
    }

    pub fn clear(&self) {
        self.delays.borrow_mut().clear();
    }
}

impl Delay for MockDelay {
    fn delay(&mut self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}

/// The 6-byte ACK frame.
#[doc(hidden)]
pub fn ack_frame() -> Vec<u8> {
    PN532_ACK.to_vec()
}

/// Build a chip-to-host frame: prefix, LEN, LCS, D5, response code,
/// body, DCS, postamble.
#[doc(hidden)]
pub fn response_frame(code: u8, body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(1 + body.len());
    payload.push(code);
    payload.extend_from_slice(body);

    let len = (payload.len() + 1) as u8;
    let mut out = PN532_FRAME_PREFIX.to_vec();
    out.push(len);
    out.push(lcs(len));
    out.push(PN532_PN532_TO_HOST);
    out.extend_from_slice(&payload);
    out.push(dcs(PN532_PN532_TO_HOST, &payload));
    out.push(PN532_POSTAMBLE);
    out
}

/// Pad `frame` with zeroes to `len` bytes, the way the chip fills its
/// fixed-size response buffer.
#[doc(hidden)]
pub fn padded(mut frame: Vec<u8>, len: usize) -> Vec<u8> {
    if frame.len() < len {
        frame.resize(len, 0x00);
    }
    frame
}

/// Queue one complete exchange on the mock: the ACK followed by the
/// response buffer. Ready probes default to ready.
#[doc(hidden)]
pub fn script_exchange(mock: &MockTransport, response: Vec<u8>) {
    mock.push_read(ack_frame());
    mock.push_read(response);
}

/// SAMConfiguration response as returned by a healthy chip.
#[doc(hidden)]
pub fn sam_response() -> Vec<u8> {
    padded(response_frame(0x15, &[]), crate::constants::SAM_RESPONSE_LEN)
}

/// GetFirmwareVersion response carrying the given fields.
#[doc(hidden)]
pub fn firmware_response(ic: u8, ver: u8, rev: u8, support: u8) -> Vec<u8> {
    response_frame(0x03, &[ic, ver, rev, support])
}

/// InListPassiveTarget response for a single Type A target.
#[doc(hidden)]
pub fn passive_target_response(sens_res: u16, sel_res: u8, uid: &[u8]) -> Vec<u8> {
    let mut body = vec![0x01, 0x01];
    body.extend_from_slice(&sens_res.to_be_bytes());
    body.push(sel_res);
    body.push(uid.len() as u8);
    body.extend_from_slice(uid);
    padded(
        response_frame(0x4B, &body),
        crate::constants::PASSIVE_TARGET_RESPONSE_LEN,
    )
}

/// InDataExchange response with a status byte and optional card data.
#[doc(hidden)]
pub fn exchange_response(status: u8, data: &[u8], len: usize) -> Vec<u8> {
    let mut body = vec![status];
    body.extend_from_slice(data);
    padded(response_frame(0x41, &body), len)
}

/// Convenience: create and initialize a Device<Initialized> backed by
/// the given mock and simulated clock. The SAMConfiguration exchange is
/// scripted here; queue the frames the test needs afterwards.
#[doc(hidden)]
pub fn initialized_mock_device(
    mock: &MockTransport,
    clock: &MockDelay,
) -> Result<device::Device<device::Initialized>> {
    script_exchange(mock, sam_response());
    let device = device::Device::new(Box::new(mock.clone()), Box::new(clock.clone()));
    device.initialize()
}
