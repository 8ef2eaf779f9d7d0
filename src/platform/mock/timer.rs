//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Uses simulated time: every delay advances the reported clock instead of
/// blocking, so timing-dependent code runs instantly and deterministically.
#[derive(Debug)]
pub struct MockTimer {
    now_us: u64,
}

impl MockTimer {
    /// Create a new mock timer starting at time 0
    pub fn new() -> Self {
        Self { now_us: 0 }
    }

    /// Advance simulated time without a delay call (for test setup)
    pub fn advance_us(&mut self, us: u64) {
        self.now_us = self.now_us.wrapping_add(us);
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(us as u64);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_us(), 5000);
    }

    #[test]
    fn test_mock_timer_now_ms() {
        let mut timer = MockTimer::new();
        timer.delay_us(3500).unwrap();
        assert_eq!(timer.now_ms(), 3);
    }

    #[test]
    fn test_mock_timer_advance() {
        let mut timer = MockTimer::new();
        timer.advance_us(2_000_000);
        assert_eq!(timer.now_ms(), 2000);
    }
}
