//! Game core
//!
//! One `GameController::run()` call is one power cycle of the box: read the
//! durable state, maybe spend an attempt, hunt for a fix, judge the
//! distance, drive the lock and display, and hand control back to the power
//! switch. The controller owns every game rule and is the only writer of
//! the durable cells and the lock position; hardware is reached exclusively
//! through the collaborator traits in [`traits`].

pub mod config;
pub mod geo;
pub mod store;
pub mod traits;

pub use config::{ConfigError, GameConfig};
pub use store::EepromCounterStore;
pub use traits::{
    DisplayPanel, DurableCounterStore, Fix, LockActuator, LockPosition, PositionSource,
    PowerSwitch, RunOutcome, StateCell,
};

use crate::platform::{Result, TimerInterface};
use core::fmt::Write;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Hold after showing the remaining-attempts count, long enough to read
/// and to let the GPS module power up
const ATTEMPTS_SETTLE_MS: u32 = 5_000;

/// Hold on "Access Denied!" before showing the distance
const DENIED_HOLD_MS: u32 = 3_000;

/// Hold on the distance readout
const DISTANCE_HOLD_MS: u32 = 10_000;

/// Hold on "No GPS Signal"
const NO_SIGNAL_HOLD_MS: u32 = 10_000;

/// Hold on the congratulations message
const WIN_HOLD_MS: u32 = 5_000;

/// How many times the exhausted-terminal message pair repeats
const EXHAUSTED_ROUNDS: u8 = 3;

/// Hold on each exhausted-terminal message
const EXHAUSTED_HOLD_MS: u32 = 5_000;

/// Seconds counted down before the power cut
const SHUTDOWN_COUNTDOWN_S: u8 = 5;

/// Hold on the backdoor over-voltage warning
const BACKDOOR_WARNING_MS: u32 = 10_000;

/// Garbage animation length in debug mode
const GARBAGE_DEBUG_MS: u32 = 10_000;

/// Garbage animation length in normal mode, long enough to outlast an
/// impatient player holding the auxiliary supply
const GARBAGE_NORMAL_MS: u32 = 120_000;

/// Base interval between garbage frames
const GARBAGE_FRAME_BASE_MS: u32 = 500;

/// Upper bound of the random addition to the frame interval
const GARBAGE_FRAME_JITTER_MS: u32 = 1_000;

/// Seconds counted down before the backdoor unlock
const UNLOCK_COUNTDOWN_S: u8 = 5;

/// Window for pulling the auxiliary supply to keep the box unlocked
const KEEP_UNLOCKED_HOLD_MS: u32 = 20_000;

/// Seconds counted down before the rearm re-lock
const REARM_COUNTDOWN_S: u8 = 5;

/// Hold on the max-attempts confirmation during rearm
const REARM_ATTEMPTS_HOLD_MS: u32 = 5_000;

/// Line buffer for formatted display text; wider than the display so
/// formatting never fails, panels truncate to their own geometry
type Line = heapless::String<20>;

/// The game-state controller
///
/// Constructed once per boot around the box's peripherals and the immutable
/// [`GameConfig`]; `run()` then plays out the whole power cycle. Safe to
/// invoke on every boot with no external reset — re-entering with whatever
/// the durable cells hold is the crash-recovery story.
pub struct GameController<'a> {
    config: &'a GameConfig,
    position: &'a mut dyn PositionSource,
    lock: &'a mut dyn LockActuator,
    display: &'a mut dyn DisplayPanel,
    store: &'a mut dyn DurableCounterStore,
    power: &'a mut dyn PowerSwitch,
    timer: &'a mut dyn TimerInterface,
    rng: SmallRng,
}

impl<'a> GameController<'a> {
    /// Create a controller over the given collaborators
    pub fn new(
        config: &'a GameConfig,
        position: &'a mut dyn PositionSource,
        lock: &'a mut dyn LockActuator,
        display: &'a mut dyn DisplayPanel,
        store: &'a mut dyn DurableCounterStore,
        power: &'a mut dyn PowerSwitch,
        timer: &'a mut dyn TimerInterface,
    ) -> Self {
        // The scramble animation is the only randomness consumer; boot-time
        // jitter in the clock reading is entropy enough for decoration.
        let rng = SmallRng::seed_from_u64(timer.now_us() ^ 0x5eed_b0c5);
        Self {
            config,
            position,
            lock,
            display,
            store,
            power,
            timer,
            rng,
        }
    }

    /// Play one full power cycle
    ///
    /// Side effects only, in the fixed order of the game contract; the
    /// returned [`RunOutcome`] is for observers and changes nothing.
    /// Errors are hardware faults, never game results.
    pub fn run(&mut self) -> Result<RunOutcome> {
        let outcome = if self.is_solved()? {
            // A solved box stays open for good until explicitly rearmed:
            // no attempt is spent and nothing is written.
            self.display.show("Congratulations!", "")?;
            self.timer.delay_ms(WIN_HOLD_MS)?;
            RunOutcome::AlreadySolved
        } else {
            // Never trust the lock position left by the previous cycle.
            self.lock.set(LockPosition::Locked)?;

            let attempts = self.attempts_remaining()?;
            if attempts == 0 {
                self.exhausted()?;
                RunOutcome::AttemptsExhausted
            } else {
                self.play_attempt(attempts)?
            }
        };

        self.shutdown()?;
        if !self.power.on_auxiliary_supply() {
            // Managed supply: the switch drops us right here. Returning
            // models the power loss; the next boot re-enters run().
            return Ok(outcome);
        }

        // Still running means the managed switch was bypassed. Only a
        // developer (or a well-equipped player) gets this far.
        self.backdoor()?;
        self.display.show("Remove Power", "To Keep Unlocked")?;
        self.timer.delay_ms(KEEP_UNLOCKED_HOLD_MS)?;
        self.rearm()?;

        Ok(outcome)
    }

    /// One search-and-evaluate attempt
    ///
    /// Two-phase by contract: the attempt is spent and persisted first,
    /// then the receiver gets its chance. Losing the signal still costs
    /// the player.
    fn play_attempt(&mut self, attempts: u8) -> Result<RunOutcome> {
        let remaining = attempts - 1;
        self.store.write(StateCell::AttemptsRemaining, remaining)?;
        crate::log_info!("attempt spent, {} remaining", remaining);

        let mut line = Line::new();
        let _ = write!(line, "{} of {}", remaining, self.config.max_attempts());
        self.display.show("Attempts Remain:", &line)?;
        self.timer.delay_ms(ATTEMPTS_SETTLE_MS)?;

        self.display.show("Searching...", "")?;
        match self.position.acquire(self.config.gps_timeout_ms())? {
            Some(fix) => {
                let distance =
                    fix.distance_to(self.config.target_latitude(), self.config.target_longitude());
                if distance <= self.config.target_radius_m() as f32 {
                    self.win()?;
                    Ok(RunOutcome::Won)
                } else {
                    let distance_m = distance as u32;
                    crate::log_info!("fix {} m from target, access denied", distance_m);
                    self.display.show("Access Denied!", "")?;
                    self.timer.delay_ms(DENIED_HOLD_MS)?;

                    let mut line = Line::new();
                    let _ = write!(line, "{} meters", distance_m);
                    self.display.show("Distance:", &line)?;
                    self.timer.delay_ms(DISTANCE_HOLD_MS)?;
                    Ok(RunOutcome::AccessDenied { distance_m })
                }
            }
            None => {
                crate::log_warn!("no fix within {} ms", self.config.gps_timeout_ms());
                self.display.show("No GPS Signal", "")?;
                self.timer.delay_ms(NO_SIGNAL_HOLD_MS)?;
                Ok(RunOutcome::NoSignal)
            }
        }
    }

    /// Put the game in the solved state
    fn win(&mut self) -> Result<()> {
        crate::log_info!("target reached, box solved");
        self.display.show("Congratulations!", "")?;
        self.store.write(StateCell::Solved, 1)?;
        self.timer.delay_ms(WIN_HOLD_MS)
    }

    /// Terminal branch for a box with no attempts left
    ///
    /// No decrement, no poll; only the backdoor gets it out of here.
    fn exhausted(&mut self) -> Result<()> {
        crate::log_warn!("attempts exhausted, box stays locked");
        for _ in 0..EXHAUSTED_ROUNDS {
            self.display.show("Game Over", "Locked Forever")?;
            self.timer.delay_ms(EXHAUSTED_HOLD_MS)?;
            self.display.show("Return To", "Manufacturer")?;
            self.timer.delay_ms(EXHAUSTED_HOLD_MS)?;
        }
        Ok(())
    }

    /// Count down and signal the managed switch to cut main power
    fn shutdown(&mut self) -> Result<()> {
        self.countdown("Powering off in:", SHUTDOWN_COUNTDOWN_S)?;
        self.power.cut_main_power()
    }

    /// Developer recovery path
    ///
    /// Force-unlocks and force-solves regardless of prior state. The long
    /// garbage animation in normal mode is the deterrent; debug mode keeps
    /// it short for bench work.
    fn backdoor(&mut self) -> Result<()> {
        self.display.show("Excess voltage!", "Remove Power!")?;
        self.timer.delay_ms(BACKDOOR_WARNING_MS)?;

        let garbage_ms = if self.config.debug() {
            GARBAGE_DEBUG_MS
        } else {
            GARBAGE_NORMAL_MS
        };
        self.garbage(garbage_ms)?;

        self.countdown("Box opens in:", UNLOCK_COUNTDOWN_S)?;
        self.lock.set(LockPosition::Unlocked)?;
        self.store.write(StateCell::Solved, 1)?;
        crate::log_warn!("backdoor unlock engaged");
        Ok(())
    }

    /// Rearm the box for the next game: locked, unsolved, full attempts
    fn rearm(&mut self) -> Result<()> {
        self.countdown("Locking in:", REARM_COUNTDOWN_S)?;
        self.lock.set(LockPosition::Locked)?;

        let max_attempts = self.config.max_attempts();
        let mut line = Line::new();
        let _ = write!(line, "{}", max_attempts);
        self.display.show("Max Attempts", &line)?;
        self.store
            .write(StateCell::AttemptsRemaining, max_attempts)?;
        self.timer.delay_ms(REARM_ATTEMPTS_HOLD_MS)?;

        self.store.write(StateCell::Solved, 0)?;
        crate::log_info!("rearmed with {} attempts", max_attempts);
        self.display.show("LOCKED", "Game reset")
    }

    /// Run the decorative garbage animation for roughly `duration_ms`
    fn garbage(&mut self, duration_ms: u32) -> Result<()> {
        let deadline = self.timer.now_ms() + duration_ms as u64;
        while self.timer.now_ms() < deadline {
            self.display.scramble(&mut self.rng)?;
            let jitter = self.rng.gen_range(0..GARBAGE_FRAME_JITTER_MS);
            self.timer.delay_ms(GARBAGE_FRAME_BASE_MS + jitter)?;
        }
        Ok(())
    }

    /// Descending one-per-second countdown with a fixed first line
    fn countdown(&mut self, line1: &str, seconds: u8) -> Result<()> {
        for i in (1..=seconds).rev() {
            let mut line = Line::new();
            let _ = write!(line, "{}...", i);
            self.display.show(line1, &line)?;
            self.timer.delay_ms(1_000)?;
        }
        Ok(())
    }

    fn is_solved(&mut self) -> Result<bool> {
        Ok(self.store.read(StateCell::Solved)? == 1)
    }

    fn attempts_remaining(&mut self) -> Result<u8> {
        self.store.read(StateCell::AttemptsRemaining)
    }
}
