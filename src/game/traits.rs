//! Collaborator interfaces for the game controller
//!
//! The controller owns every game rule but touches hardware only through
//! these seams, so each one can be substituted with a scripted double in
//! tests. Concrete implementations over the platform traits live in
//! `crate::devices`.

use crate::game::geo;
use crate::platform::Result;
use rand::RngCore;

/// A validated position reading
///
/// Only complete, checksum-valid sentences produce a `Fix`; there is no
/// partially-filled variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    /// Latitude in degrees (-90 to +90)
    pub latitude: f32,
    /// Longitude in degrees (-180 to +180)
    pub longitude: f32,
    /// Monotonic clock reading when the fix completed (age indicator)
    pub acquired_at_ms: u64,
}

impl Fix {
    /// Great-circle distance in meters from this fix to a target coordinate
    pub fn distance_to(&self, latitude: f32, longitude: f32) -> f32 {
        geo::haversine_distance_m(self.latitude, self.longitude, latitude, longitude)
    }
}

/// Lock positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockPosition {
    /// Lock engaged, lid held shut
    Locked,
    /// Lock disengaged, lid free
    Unlocked,
}

/// The two durable cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateCell {
    /// Solved flag: 1 when the puzzle has been solved, anything else unsolved
    Solved,
    /// Attempts remaining: 0-255
    AttemptsRemaining,
}

/// What a single power cycle amounted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunOutcome {
    /// The box was already solved; nothing was consumed or written
    AlreadySolved,
    /// A fix arrived inside the target radius; the box is now solved
    Won,
    /// A fix arrived outside the target radius
    AccessDenied {
        /// Whole-meter distance to the target, as shown to the player
        distance_m: u32,
    },
    /// No valid fix within the acquisition timeout
    NoSignal,
    /// No attempts were left at entry; the position source was not polled
    AttemptsExhausted,
}

/// Source of validated position fixes
pub trait PositionSource {
    /// Poll for a valid fix, giving up after `timeout_ms`
    ///
    /// Returns `Ok(None)` once the timeout elapses with no complete valid
    /// fix — never earlier. Transport failures propagate as errors.
    fn acquire(&mut self, timeout_ms: u32) -> Result<Option<Fix>>;
}

/// The physical lock
pub trait LockActuator {
    /// Drive the lock to the given position, blocking through the
    /// mechanical settle time before returning
    fn set(&mut self, position: LockPosition) -> Result<()>;
}

/// Two lines of text in front of the player
pub trait DisplayPanel {
    /// Overwrite both display lines (content past the display width is
    /// truncated)
    fn show(&mut self, line1: &str, line2: &str) -> Result<()>;

    /// Fill the whole frame with random decorative glyphs
    ///
    /// Purely cosmetic; one call renders one frame. Frame pacing is the
    /// caller's business.
    fn scramble(&mut self, rng: &mut dyn RngCore) -> Result<()>;
}

/// Persistent storage for the two durable game cells
///
/// There is no transaction across the cells: a power loss between two
/// writes can leave them inconsistent, and the controller tolerates that
/// by re-reading whatever was last durably written on the next boot.
pub trait DurableCounterStore {
    /// Read one cell
    fn read(&mut self, cell: StateCell) -> Result<u8>;

    /// Write one cell; durable once this returns
    fn write(&mut self, cell: StateCell, value: u8) -> Result<()>;
}

/// The managed power switch
pub trait PowerSwitch {
    /// Signal "cut main power now"
    ///
    /// On the managed supply this is the last thing the controller ever
    /// does in a cycle. The switching hardware itself is outside this
    /// crate.
    fn cut_main_power(&mut self) -> Result<()>;

    /// Whether the controller is still running on an auxiliary supply
    /// that bypasses the managed switch
    ///
    /// Only meaningful after `cut_main_power`: surviving the cut is what
    /// reveals the auxiliary supply, and what opens the backdoor window.
    fn on_auxiliary_supply(&self) -> bool;
}
