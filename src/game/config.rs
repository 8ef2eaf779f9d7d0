//! Game configuration
//!
//! One immutable, validated parameter set per box. Out-of-range values are
//! rejected here, at construction, instead of being accepted silently and
//! discovered as miswired hardware in the field.

/// Highest angle a standard hobby servo accepts
pub const SERVO_ANGLE_MAX: u8 = 180;

/// Default radius around the target that counts as "there" (meters)
pub const DEFAULT_TARGET_RADIUS_M: u16 = 500;

/// Default number of attempts a fresh box grants
pub const DEFAULT_MAX_ATTEMPTS: u8 = 50;

/// Default servo angle for the locked position (degrees)
pub const DEFAULT_LOCKED_ANGLE: u8 = 160;

/// Default servo angle for the unlocked position (degrees)
pub const DEFAULT_UNLOCKED_ANGLE: u8 = 20;

/// Default GPS acquisition timeout (milliseconds)
pub const DEFAULT_GPS_TIMEOUT_MS: u32 = 60_000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Target coordinate outside -90..=90 latitude / -180..=180 longitude
    CoordinateOutOfRange,
    /// Servo angle above 180 degrees
    AngleOutOfRange,
}

/// Immutable game parameters
///
/// Constructed once by the surrounding application and handed to the
/// controller by reference for its lifetime. Never mutated during a run.
#[derive(Debug, Clone)]
pub struct GameConfig {
    target_latitude: f32,
    target_longitude: f32,
    target_radius_m: u16,
    max_attempts: u8,
    locked_angle: u8,
    unlocked_angle: u8,
    debug: bool,
    gps_timeout_ms: u32,
}

impl GameConfig {
    /// Create a configuration for the given target coordinate, with
    /// defaults for everything else
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::CoordinateOutOfRange` for latitudes outside
    /// ±90° or longitudes outside ±180°.
    pub fn new(target_latitude: f32, target_longitude: f32) -> Result<Self, ConfigError> {
        if !(-90.0..=90.0).contains(&target_latitude)
            || !(-180.0..=180.0).contains(&target_longitude)
        {
            return Err(ConfigError::CoordinateOutOfRange);
        }
        Ok(Self {
            target_latitude,
            target_longitude,
            target_radius_m: DEFAULT_TARGET_RADIUS_M,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            locked_angle: DEFAULT_LOCKED_ANGLE,
            unlocked_angle: DEFAULT_UNLOCKED_ANGLE,
            debug: false,
            gps_timeout_ms: DEFAULT_GPS_TIMEOUT_MS,
        })
    }

    /// Set the solve radius in meters
    ///
    /// A radius of 0 demands coincidence with the target within the
    /// resolution of the distance computation.
    pub fn with_target_radius_m(mut self, meters: u16) -> Self {
        self.target_radius_m = meters;
        self
    }

    /// Set the number of attempts a freshly armed box grants
    pub fn with_max_attempts(mut self, attempts: u8) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Set the servo angles for the locked and unlocked positions
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AngleOutOfRange` for angles above 180°.
    pub fn with_lock_angles(mut self, locked: u8, unlocked: u8) -> Result<Self, ConfigError> {
        if locked > SERVO_ANGLE_MAX || unlocked > SERVO_ANGLE_MAX {
            return Err(ConfigError::AngleOutOfRange);
        }
        self.locked_angle = locked;
        self.unlocked_angle = unlocked;
        Ok(self)
    }

    /// Set the GPS acquisition timeout in milliseconds
    pub fn with_gps_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.gps_timeout_ms = timeout_ms;
        self
    }

    /// Enable or disable debug mode
    ///
    /// Debug mode shortens the backdoor's garbage animation and turns on
    /// the diagnostic display mirror.
    pub fn with_debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Target latitude in degrees
    pub fn target_latitude(&self) -> f32 {
        self.target_latitude
    }

    /// Target longitude in degrees
    pub fn target_longitude(&self) -> f32 {
        self.target_longitude
    }

    /// Solve radius in meters
    pub fn target_radius_m(&self) -> u16 {
        self.target_radius_m
    }

    /// Attempts granted on rearm
    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    /// Servo angle for the locked position
    pub fn locked_angle(&self) -> u8 {
        self.locked_angle
    }

    /// Servo angle for the unlocked position
    pub fn unlocked_angle(&self) -> u8 {
        self.unlocked_angle
    }

    /// Whether debug mode is on
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// GPS acquisition timeout in milliseconds
    pub fn gps_timeout_ms(&self) -> u32 {
        self.gps_timeout_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::new(48.1173, 11.5167).unwrap();
        assert_eq!(config.target_radius_m(), 500);
        assert_eq!(config.max_attempts(), 50);
        assert_eq!(config.locked_angle(), 160);
        assert_eq!(config.unlocked_angle(), 20);
        assert_eq!(config.gps_timeout_ms(), 60_000);
        assert!(!config.debug());
    }

    #[test]
    fn test_config_rejects_bad_coordinates() {
        assert_eq!(
            GameConfig::new(91.0, 0.0).unwrap_err(),
            ConfigError::CoordinateOutOfRange
        );
        assert_eq!(
            GameConfig::new(0.0, -180.5).unwrap_err(),
            ConfigError::CoordinateOutOfRange
        );
    }

    #[test]
    fn test_config_rejects_bad_angles() {
        let config = GameConfig::new(0.0, 0.0).unwrap();
        assert_eq!(
            config.with_lock_angles(181, 20).unwrap_err(),
            ConfigError::AngleOutOfRange
        );

        let config = GameConfig::new(0.0, 0.0).unwrap();
        assert_eq!(
            config.with_lock_angles(160, 200).unwrap_err(),
            ConfigError::AngleOutOfRange
        );
    }

    #[test]
    fn test_config_accepts_boundary_angles() {
        let config = GameConfig::new(0.0, 0.0)
            .unwrap()
            .with_lock_angles(180, 0)
            .unwrap();
        assert_eq!(config.locked_angle(), 180);
        assert_eq!(config.unlocked_angle(), 0);
    }

    #[test]
    fn test_config_builders() {
        let config = GameConfig::new(0.0, 0.0)
            .unwrap()
            .with_target_radius_m(0)
            .with_max_attempts(3)
            .with_gps_timeout_ms(1_000)
            .with_debug(true);
        assert_eq!(config.target_radius_m(), 0);
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.gps_timeout_ms(), 1_000);
        assert!(config.debug());
    }
}
