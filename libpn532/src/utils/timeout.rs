//! Timeout helpers used across the crate.
//!
//! A timeout of `Duration::ZERO` means "wait indefinitely"; it must only be
//! used for operations expected to complete eventually (a card being
//! presented), never for fixed-latency chip responses.

use std::time::Duration;

/// Wait without bound.
pub const WAIT_FOREVER: Duration = Duration::ZERO;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// True when `timeout` means "no timeout".
pub fn is_forever(timeout: Duration) -> bool {
    timeout.is_zero()
}

/// True when waiting `step` more after `waited` would exceed `timeout`.
/// Never true for [`WAIT_FOREVER`].
pub fn would_exceed(waited: Duration, step: Duration, timeout: Duration) -> bool {
    !is_forever(timeout) && waited.saturating_add(step) > timeout
}
