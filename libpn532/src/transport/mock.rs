// libpn532-rs/libpn532/src/transport/mock.rs

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::constants::PN532_I2C_READY;
use crate::transport::traits::Transport;
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    writes: Vec<Vec<u8>>,
    reads: VecDeque<Result<Vec<u8>>>,
    statuses: VecDeque<u8>,
    transactions: usize,
    probes: usize,
}

/// Mock transport for unit tests. It records written frames and returns
/// queued reads and status bytes.
///
/// Clones share the same state, so a test can hand one clone to a
/// `Device` and keep another to inspect what was sent.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bytes returned by the next read.
    pub fn push_read(&self, data: Vec<u8>) {
        self.state.borrow_mut().reads.push_back(Ok(data));
    }

    /// Make the next read fail with a bus error.
    pub fn push_read_error(&self, msg: &str) {
        self.state
            .borrow_mut()
            .reads
            .push_back(Err(Error::Bus(msg.to_string())));
    }

    /// Queue a status byte for the next probe. Once the queue is empty
    /// probes report ready.
    pub fn push_status(&self, status: u8) {
        self.state.borrow_mut().statuses.push_back(status);
    }

    /// Queue `n` not-ready probes.
    pub fn push_not_ready(&self, n: usize) {
        let mut state = self.state.borrow_mut();
        state.statuses.extend(std::iter::repeat(0x00).take(n));
    }

    /// Every non-empty write, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.state.borrow().writes.clone()
    }

    pub fn last_write(&self) -> Option<Vec<u8>> {
        self.state.borrow().writes.last().cloned()
    }

    /// Number of `transact` calls.
    pub fn transactions(&self) -> usize {
        self.state.borrow().transactions
    }

    /// Number of `probe_status` calls.
    pub fn probes(&self) -> usize {
        self.state.borrow().probes
    }

    /// Total bus calls of any kind.
    pub fn calls(&self) -> usize {
        let state = self.state.borrow();
        state.transactions + state.probes
    }

    /// Reads still queued.
    pub fn pending_reads(&self) -> usize {
        self.state.borrow().reads.len()
    }
}

impl Transport for MockTransport {
    fn transact(&mut self, write: &[u8], read_len: usize) -> Result<Vec<u8>> {
        let mut state = self.state.borrow_mut();
        state.transactions += 1;
        if !write.is_empty() {
            state.writes.push(write.to_vec());
        }
        if read_len == 0 {
            return Ok(Vec::new());
        }
        match state.reads.pop_front() {
            Some(Ok(mut data)) => {
                data.truncate(read_len);
                Ok(data)
            }
            Some(Err(e)) => Err(e),
            None => Err(Error::Bus("no queued response".into())),
        }
    }

    fn probe_status(&mut self) -> Result<u8> {
        let mut state = self.state.borrow_mut();
        state.probes += 1;
        Ok(state.statuses.pop_front().unwrap_or(PN532_I2C_READY))
    }
}
