//! Timer interface trait
//!
//! This module defines the timer and delay interface that platform implementations must provide.
//! Every wait in the game — display holds, servo settle, GPS timeout — goes
//! through this trait, so tests can substitute simulated time.

use crate::platform::Result;

/// Timer interface trait
///
/// Platform implementations must provide this interface for timing and delays.
///
/// # Safety Invariants
///
/// - Timer peripheral must be initialized before use
/// - Monotonic time source (never goes backwards)
pub trait TimerInterface {
    /// Delay for specified number of microseconds
    ///
    /// Blocks execution for at least `us` microseconds.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay operation fails.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Delay for specified number of milliseconds
    ///
    /// Blocks execution for at least `ms` milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay operation fails.
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Get current time in microseconds
    ///
    /// Returns a monotonic timestamp in microseconds since platform initialization.
    fn now_us(&self) -> u64;

    /// Get current time in milliseconds
    ///
    /// Returns a monotonic timestamp in milliseconds since platform initialization.
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}

impl<T: TimerInterface + ?Sized> TimerInterface for &mut T {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        (**self).delay_us(us)
    }

    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        (**self).delay_ms(ms)
    }

    fn now_us(&self) -> u64 {
        (**self).now_us()
    }

    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
