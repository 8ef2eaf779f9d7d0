//! Player-facing display panel
//!
//! Two lines of text on the character LCD, plus the decorative scramble
//! frames the backdoor uses. In debug mode every frame is also mirrored as
//! plain text to the diagnostic console, framed by delimiter lines, so a
//! bench log shows exactly what the player saw.

use crate::game::traits::DisplayPanel;
use crate::platform::{LcdInterface, Result, UartInterface};
use rand::RngCore;

/// Decorative glyph codes from the display controller's extended ROM
/// (blocks, katakana fragments); visually dense enough to read as a fault
const GLYPHS: [u8; 26] = [
    0xA6, 0xFF, 0xD0, 0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB,
    0xCC, 0xCD, 0xCE, 0xCF, 0xB1, 0xB2, 0xB3, 0xB5, 0xB6, 0xB7, 0xB8,
];

/// Console delimiter line around each mirrored frame
const FRAME_DELIMITER: &[u8] = b"================\r\n";

/// Display panel over a character LCD with optional console mirroring
pub struct Panel<L: LcdInterface, U: UartInterface> {
    lcd: L,
    console: U,
    mirror: bool,
}

impl<L: LcdInterface, U: UartInterface> Panel<L, U> {
    /// Create a panel
    ///
    /// With `mirror` set, every display update is echoed to `console`;
    /// otherwise the console stays silent.
    pub fn new(lcd: L, console: U, mirror: bool) -> Self {
        Self {
            lcd,
            console,
            mirror,
        }
    }

    /// Clip text to the display width on a character boundary
    fn clip_to(text: &str, cols: usize) -> &str {
        match text.char_indices().nth(cols) {
            Some((idx, _)) => &text[..idx],
            None => text,
        }
    }

    fn mirror_lines(&mut self, line1: &str, line2: &str) -> Result<()> {
        self.console.write(FRAME_DELIMITER)?;
        self.console.write(line1.as_bytes())?;
        self.console.write(b"\r\n")?;
        self.console.write(line2.as_bytes())?;
        self.console.write(b"\r\n")?;
        self.console.write(FRAME_DELIMITER)?;
        self.console.write(b"\r\n")?;
        Ok(())
    }
}

impl<L: LcdInterface, U: UartInterface> DisplayPanel for Panel<L, U> {
    fn show(&mut self, line1: &str, line2: &str) -> Result<()> {
        let cols = self.lcd.columns() as usize;
        self.lcd.clear()?;
        self.lcd.set_cursor(0, 0)?;
        self.lcd.print(Self::clip_to(line1, cols))?;
        self.lcd.set_cursor(0, 1)?;
        self.lcd.print(Self::clip_to(line2, cols))?;

        if self.mirror {
            self.mirror_lines(line1, line2)?;
        }
        Ok(())
    }

    fn scramble(&mut self, rng: &mut dyn RngCore) -> Result<()> {
        if self.mirror {
            self.console.write(FRAME_DELIMITER)?;
        }
        for row in 0..self.lcd.rows() {
            for col in 0..self.lcd.columns() {
                let glyph = GLYPHS[rng.next_u32() as usize % GLYPHS.len()];
                self.lcd.set_cursor(col, row)?;
                self.lcd.write_glyph(glyph)?;
                if self.mirror {
                    self.console.write(&[glyph])?;
                }
            }
            if self.mirror {
                self.console.write(b"\r\n")?;
            }
        }
        if self.mirror {
            self.console.write(FRAME_DELIMITER)?;
            self.console.write(b"\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockLcd, MockUart};
    use crate::platform::traits::UartConfig;
    use rand::{rngs::SmallRng, SeedableRng};

    fn panel(mirror: bool) -> Panel<MockLcd, MockUart> {
        Panel::new(MockLcd::new(), MockUart::new(UartConfig::default()), mirror)
    }

    #[test]
    fn test_show_writes_both_lines() {
        let mut panel = panel(false);
        panel.show("Attempts Remain:", "2 of 50").unwrap();
        assert!(panel.lcd.line_is(0, "Attempts Remain:"));
        assert!(panel.lcd.line_is(1, "2 of 50"));
    }

    #[test]
    fn test_show_overwrites_previous_frame() {
        let mut panel = panel(false);
        panel.show("Attempts Remain:", "2 of 50").unwrap();
        panel.show("Searching...", "").unwrap();
        assert!(panel.lcd.line_is(0, "Searching..."));
        assert!(panel.lcd.line_is(1, ""));
    }

    #[test]
    fn test_show_truncates_long_lines() {
        let mut panel = panel(false);
        panel.show("This line is far too long to fit", "").unwrap();
        assert!(panel.lcd.line_is(0, "This line is far"));
    }

    #[test]
    fn test_show_without_mirror_keeps_console_silent() {
        let mut panel = panel(false);
        panel.show("Searching...", "").unwrap();
        assert!(panel.console.tx_buffer().is_empty());
    }

    #[test]
    fn test_show_mirrors_framed_text() {
        let mut panel = panel(true);
        panel.show("Access Denied!", "").unwrap();
        assert!(panel.console.tx_contains(b"================"));
        assert!(panel.console.tx_contains(b"Access Denied!\r\n"));
    }

    #[test]
    fn test_scramble_fills_frame_with_glyphs() {
        let mut panel = panel(false);
        let mut rng = SmallRng::seed_from_u64(7);
        panel.scramble(&mut rng).unwrap();

        for row in 0..2 {
            for &byte in panel.lcd.line_bytes(row) {
                assert!(GLYPHS.contains(&byte));
            }
        }
    }

    #[test]
    fn test_scramble_mirrors_rows() {
        let mut panel = panel(true);
        let mut rng = SmallRng::seed_from_u64(7);
        panel.scramble(&mut rng).unwrap();

        // Two 16-glyph rows plus framing
        let tx = panel.console.tx_buffer();
        assert!(tx.len() >= 2 * 16 + 2 * FRAME_DELIMITER.len());
        assert!(panel.console.tx_contains(b"================"));
    }

    #[test]
    fn test_scramble_varies_between_frames() {
        let mut panel = panel(false);
        let mut rng = SmallRng::seed_from_u64(7);
        panel.scramble(&mut rng).unwrap();
        let first: Vec<u8> = panel.lcd.line_bytes(0).to_vec();
        panel.scramble(&mut rng).unwrap();
        let second: Vec<u8> = panel.lcd.line_bytes(0).to_vec();
        assert_ne!(first, second);
    }
}
