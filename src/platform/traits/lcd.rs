//! Character display interface trait
//!
//! This module defines the raw character-display (LCD) driver boundary. The
//! driver itself — controller commands, bus timing, initialization — lives in
//! the platform implementation; game code only positions the cursor and
//! writes characters.

use crate::platform::Result;

/// Character display interface trait
///
/// Platform implementations must provide this interface for a fixed-geometry
/// character display (the reference hardware is a 16x2 module).
///
/// # Safety Invariants
///
/// - Display must be initialized before use
/// - Only one owner per display instance
pub trait LcdInterface {
    /// Clear the display and home the cursor
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Lcd` if the controller rejects the command.
    fn clear(&mut self) -> Result<()>;

    /// Move the cursor to the given column and row (both zero-based)
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Lcd(LcdError::InvalidPosition)` if the
    /// position is outside the character grid.
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<()>;

    /// Print text starting at the cursor
    ///
    /// Characters past the end of the row are dropped.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Lcd` if the write fails.
    fn print(&mut self, text: &str) -> Result<()>;

    /// Write a single raw glyph code at the cursor
    ///
    /// Glyph codes above 0x7F address the controller's extended character
    /// ROM (decorative symbols, katakana on the reference module).
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Lcd` if the write fails.
    fn write_glyph(&mut self, glyph: u8) -> Result<()>;

    /// Number of character columns
    fn columns(&self) -> u8;

    /// Number of character rows
    fn rows(&self) -> u8;
}

impl<T: LcdInterface + ?Sized> LcdInterface for &mut T {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<()> {
        (**self).set_cursor(col, row)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        (**self).print(text)
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<()> {
        (**self).write_glyph(glyph)
    }

    fn columns(&self) -> u8 {
        (**self).columns()
    }

    fn rows(&self) -> u8 {
        (**self).rows()
    }
}
