//! Blocking delay source for the link controller.

use std::time::Duration;

/// Blocking delay. The link controller sleeps through this trait so
/// tests can substitute a simulated clock.
pub trait Delay {
    fn delay(&mut self, duration: Duration);
}

/// Delay backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl Delay for StdDelay {
    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Adapter for any `embedded_hal::delay::DelayNs` provider.
#[cfg(feature = "i2c")]
#[derive(Debug)]
pub struct HalDelay<D>(pub D);

#[cfg(feature = "i2c")]
impl<D: embedded_hal::delay::DelayNs> Delay for HalDelay<D> {
    fn delay(&mut self, duration: Duration) {
        self.0.delay_us(u32::try_from(duration.as_micros()).unwrap_or(u32::MAX));
    }
}
