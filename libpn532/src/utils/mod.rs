//! Utilities for libpn532: small, reusable helpers used across the crate.
//!
//! Hex rendering for wire dumps, timeout arithmetic for the ready-wait
//! loop and the blocking delay abstraction the link controller sleeps on.

pub mod delay;
pub mod hex;
pub mod timeout;

pub use delay::*;
pub use hex::*;
pub use timeout::*;
