//! Servo-driven lock actuator
//!
//! Converts the two named lock positions into servo pulse widths and holds
//! control flow until the horn has finished its travel. Pulse timing is
//! the usual hobby-servo convention: 50 Hz frame, 1000 µs pulse at 0°,
//! 2000 µs at 180°.

use crate::game::traits::{LockActuator, LockPosition};
use crate::platform::{PwmInterface, Result, TimerInterface};

/// Servo pulse width at 0 degrees (µs)
const PULSE_MIN_US: u32 = 1_000;

/// Servo pulse span across the 180 degree range (µs)
const PULSE_SPAN_US: u32 = 1_000;

/// PWM period at the 50 Hz servo frame rate (µs)
const PERIOD_US: f32 = 20_000.0;

/// Mechanical travel allowance after a position command
const SETTLE_MS: u32 = 500;

/// Lock actuator built on a servo PWM channel
///
/// The configured angles come validated (0-180) from the game
/// configuration.
pub struct ServoLock<P: PwmInterface, T: TimerInterface> {
    pwm: P,
    timer: T,
    locked_angle: u8,
    unlocked_angle: u8,
    position: Option<LockPosition>,
}

impl<P: PwmInterface, T: TimerInterface> ServoLock<P, T> {
    /// Create a lock over the given PWM channel and enable its output
    pub fn new(pwm: P, timer: T, locked_angle: u8, unlocked_angle: u8) -> Self {
        let mut lock = Self {
            pwm,
            timer,
            locked_angle,
            unlocked_angle,
            position: None,
        };
        lock.pwm.enable();
        lock
    }

    /// Last commanded position, if any this power cycle
    pub fn position(&self) -> Option<LockPosition> {
        self.position
    }

    /// Convert a servo angle to a pulse width in microseconds
    fn angle_to_pulse(angle: u8) -> u16 {
        (PULSE_MIN_US + angle as u32 * PULSE_SPAN_US / 180) as u16
    }

    /// Convert a pulse width to a PWM duty cycle at the servo frame rate
    fn pulse_to_duty_cycle(pulse_us: u16) -> f32 {
        pulse_us as f32 / PERIOD_US
    }
}

impl<P: PwmInterface, T: TimerInterface> LockActuator for ServoLock<P, T> {
    fn set(&mut self, position: LockPosition) -> Result<()> {
        let angle = match position {
            LockPosition::Locked => self.locked_angle,
            LockPosition::Unlocked => self.unlocked_angle,
        };

        let duty = Self::pulse_to_duty_cycle(Self::angle_to_pulse(angle));
        self.pwm.set_duty_cycle(duty)?;

        // Block until the horn has had time to reach the commanded angle;
        // proceeding early could report a lock that is not yet engaged.
        self.timer.delay_ms(SETTLE_MS)?;

        self.position = Some(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockPwm, MockTimer};
    use crate::platform::traits::PwmConfig;

    #[test]
    fn test_angle_to_pulse() {
        assert_eq!(ServoLock::<MockPwm, MockTimer>::angle_to_pulse(0), 1000);
        assert_eq!(ServoLock::<MockPwm, MockTimer>::angle_to_pulse(90), 1500);
        assert_eq!(ServoLock::<MockPwm, MockTimer>::angle_to_pulse(180), 2000);
    }

    #[test]
    fn test_pulse_to_duty_cycle() {
        // 50 Hz = 20,000 µs period
        let duty = ServoLock::<MockPwm, MockTimer>::pulse_to_duty_cycle(1500);
        assert!((duty - 0.075).abs() < 0.0001);
    }

    #[test]
    fn test_lock_drives_locked_angle() {
        let mut pwm = MockPwm::new(PwmConfig::default());
        {
            let mut lock = ServoLock::new(&mut pwm, MockTimer::new(), 160, 20);
            lock.set(LockPosition::Locked).unwrap();
            assert_eq!(lock.position(), Some(LockPosition::Locked));
        }
        // 160 degrees -> 1888 µs -> 9.44% duty
        assert!((pwm.duty_cycle() - 0.0944).abs() < 0.0005);
        assert!(pwm.is_enabled());
    }

    #[test]
    fn test_unlock_drives_unlocked_angle() {
        let mut pwm = MockPwm::new(PwmConfig::default());
        {
            let mut lock = ServoLock::new(&mut pwm, MockTimer::new(), 160, 20);
            lock.set(LockPosition::Unlocked).unwrap();
        }
        // 20 degrees -> 1111 µs -> 5.55% duty
        assert!((pwm.duty_cycle() - 0.0555).abs() < 0.0005);
    }

    #[test]
    fn test_set_blocks_for_settle_time() {
        let mut timer = MockTimer::new();
        let mut pwm = MockPwm::new(PwmConfig::default());
        {
            let mut lock = ServoLock::new(&mut pwm, &mut timer, 160, 20);
            lock.set(LockPosition::Locked).unwrap();
        }
        assert_eq!(timer.now_ms(), 500);
    }

    #[test]
    fn test_position_starts_unknown() {
        let lock = ServoLock::new(MockPwm::new(PwmConfig::default()), MockTimer::new(), 160, 20);
        assert_eq!(lock.position(), None);
    }
}
