//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// UART operation failed
    Uart(UartError),
    /// PWM operation failed
    Pwm(PwmError),
    /// GPIO operation failed
    Gpio(GpioError),
    /// Timer operation failed
    Timer(TimerError),
    /// EEPROM operation failed
    Eeprom(EepromError),
    /// Character display operation failed
    Lcd(LcdError),
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    /// Write operation failed
    WriteFailed,
    /// Read operation failed
    ReadFailed,
    /// Invalid baud rate
    InvalidBaudRate,
    /// Framing error
    FramingError,
    /// Overrun error
    Overrun,
}

/// PWM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Invalid duty cycle value
    InvalidDutyCycle,
    /// Invalid frequency
    InvalidFrequency,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// Timer overflow
    Overflow,
    /// Invalid duration
    InvalidDuration,
}

/// EEPROM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EepromError {
    /// Address outside the persisted region
    InvalidAddress,
    /// Write operation failed
    WriteFailed,
}

/// Character-display-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdError {
    /// Cursor position outside the character grid
    InvalidPosition,
    /// Write operation failed
    WriteFailed,
}

impl From<UartError> for PlatformError {
    fn from(e: UartError) -> Self {
        PlatformError::Uart(e)
    }
}

impl From<PwmError> for PlatformError {
    fn from(e: PwmError) -> Self {
        PlatformError::Pwm(e)
    }
}

impl From<GpioError> for PlatformError {
    fn from(e: GpioError) -> Self {
        PlatformError::Gpio(e)
    }
}

impl From<TimerError> for PlatformError {
    fn from(e: TimerError) -> Self {
        PlatformError::Timer(e)
    }
}

impl From<EepromError> for PlatformError {
    fn from(e: EepromError) -> Self {
        PlatformError::Eeprom(e)
    }
}

impl From<LcdError> for PlatformError {
    fn from(e: LcdError) -> Self {
        PlatformError::Lcd(e)
    }
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
            PlatformError::Pwm(e) => write!(f, "PWM error: {:?}", e),
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "Timer error: {:?}", e),
            PlatformError::Eeprom(e) => write!(f, "EEPROM error: {:?}", e),
            PlatformError::Lcd(e) => write!(f, "Display error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "Resource not available"),
        }
    }
}
