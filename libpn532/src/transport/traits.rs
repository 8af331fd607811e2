// libpn532-rs/libpn532/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts bus I/O away from protocol/device logic.
///
/// Both calls block until the bus transaction finishes and carry no
/// timeout of their own; waiting on the chip is the link controller's job.
pub trait Transport {
    /// Combined write-then-read transaction. Writes `write` (skipped when
    /// empty), then reads `read_len` frame bytes (skipped when zero).
    fn transact(&mut self, write: &[u8], read_len: usize) -> Result<Vec<u8>>;

    /// Read the single-byte ready/status indicator.
    fn probe_status(&mut self) -> Result<u8>;

    /// Write-only convenience.
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.transact(data, 0).map(|_| ())
    }

    /// Read-only convenience.
    fn read(&mut self, len: usize) -> Result<Vec<u8>> {
        self.transact(&[], len)
    }
}
