//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod eeprom;
pub mod gpio;
pub mod lcd;
pub mod pwm;
pub mod timer;
pub mod uart;

// Re-export trait interfaces
pub use eeprom::EepromInterface;
pub use gpio::{GpioInterface, GpioMode};
pub use lcd::LcdInterface;
pub use pwm::{PwmConfig, PwmInterface};
pub use timer::TimerInterface;
pub use uart::{UartConfig, UartInterface, UartParity, UartStopBits};
