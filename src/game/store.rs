//! Durable cell storage over EEPROM
//!
//! Maps the two named game cells onto fixed EEPROM addresses. The cell
//! layout is part of the box's provisioning contract: address 0 holds the
//! solved flag (1 = solved), address 1 holds the attempts counter.

use crate::game::traits::{DurableCounterStore, StateCell};
use crate::platform::{EepromInterface, Result};

/// EEPROM address of the solved flag
const SOLVED_ADDR: u32 = 0;

/// EEPROM address of the attempts-remaining counter
const ATTEMPTS_ADDR: u32 = 1;

/// `DurableCounterStore` backed by an EEPROM
///
/// A factory-fresh (erased, 0xFF) part reads as unsolved with 255 attempts;
/// provisioning always rearms the box before it ships, so players never see
/// that state.
pub struct EepromCounterStore<E: EepromInterface> {
    eeprom: E,
}

impl<E: EepromInterface> EepromCounterStore<E> {
    /// Create a store over the given EEPROM
    pub fn new(eeprom: E) -> Self {
        Self { eeprom }
    }

    fn address(cell: StateCell) -> u32 {
        match cell {
            StateCell::Solved => SOLVED_ADDR,
            StateCell::AttemptsRemaining => ATTEMPTS_ADDR,
        }
    }
}

impl<E: EepromInterface> DurableCounterStore for EepromCounterStore<E> {
    fn read(&mut self, cell: StateCell) -> Result<u8> {
        self.eeprom.read_byte(Self::address(cell))
    }

    fn write(&mut self, cell: StateCell, value: u8) -> Result<()> {
        self.eeprom.write_byte(Self::address(cell), value)
    }
}
