//! EEPROM interface trait
//!
//! This module defines the persistent byte-cell storage interface that platform
//! implementations must provide. The game keeps its durable state (solved flag,
//! attempts remaining) in two cells at fixed addresses.
//!
//! # EEPROM Characteristics
//!
//! - Byte-addressed: single bytes are written in place, no erase/block model
//! - Contents are retained across power loss until the next write
//! - No wear leveling is assumed beyond the medium's native endurance
//! - A write interrupted by power loss may leave the cell with either the
//!   old or the new value; callers must tolerate both on the next boot

use crate::platform::Result;

/// EEPROM interface trait
///
/// Platform implementations must provide this interface for persistent
/// byte-cell storage.
pub trait EepromInterface {
    /// Read one byte from the given address
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Eeprom(EepromError::InvalidAddress)` if the
    /// address is outside the persisted region.
    fn read_byte(&mut self, address: u32) -> Result<u8>;

    /// Write one byte to the given address
    ///
    /// The write is durable once this returns.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Eeprom(EepromError::InvalidAddress)` if the
    /// address is outside the persisted region, or
    /// `PlatformError::Eeprom(EepromError::WriteFailed)` if the medium
    /// rejects the write.
    fn write_byte(&mut self, address: u32, value: u8) -> Result<()>;

    /// Get total capacity in bytes
    fn capacity(&self) -> u32;
}

impl<T: EepromInterface + ?Sized> EepromInterface for &mut T {
    fn read_byte(&mut self, address: u32) -> Result<u8> {
        (**self).read_byte(address)
    }

    fn write_byte(&mut self, address: u32, value: u8) -> Result<()> {
        (**self).write_byte(address, value)
    }

    fn capacity(&self) -> u32 {
        (**self).capacity()
    }
}
