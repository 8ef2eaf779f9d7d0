//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the box's peripherals.
//! Board bring-up (pin wiring, clock setup, serial console configuration)
//! happens outside this crate; everything inside talks to hardware through
//! these traits only.

pub mod error;
pub mod traits;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    EepromInterface, GpioInterface, LcdInterface, PwmInterface, TimerInterface, UartInterface,
};
