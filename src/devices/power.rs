//! Managed power switch kill line
//!
//! The box's main supply runs through a latching switch: the player's
//! button latches it on, and a high level on the kill line releases it.
//! An auxiliary supply (bench jack) bypasses the switch entirely — which
//! is exactly the condition the backdoor keys on.

use crate::game::traits::PowerSwitch;
use crate::platform::{GpioInterface, Result};

/// Power switch wrapper over the kill-line GPIO
pub struct LatchingPowerSwitch<G: GpioInterface> {
    kill_line: G,
}

impl<G: GpioInterface> LatchingPowerSwitch<G> {
    /// Create a switch wrapper; the kill line must be an output, idle low
    pub fn new(kill_line: G) -> Self {
        Self { kill_line }
    }
}

impl<G: GpioInterface> PowerSwitch for LatchingPowerSwitch<G> {
    fn cut_main_power(&mut self) -> Result<()> {
        self.kill_line.set_high()
    }

    fn on_auxiliary_supply(&self) -> bool {
        // Still executing after the cut means the switch did not drop us:
        // some other supply is holding the rail up.
        true
    }
}
