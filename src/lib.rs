#![cfg_attr(not(test), no_std)]

//! geobox - Game-state controller for a GPS-locked puzzle box
//!
//! A reverse-geocache: the box only opens at one place on Earth. On every
//! power-up the controller reads the durable game state, spends an attempt,
//! hunts for a GPS fix, and drives the lock servo and character display
//! accordingly. Solved/attempts state lives in EEPROM and survives power
//! loss; a developer backdoor can always recover a stuck box.

// Hardware abstraction layer: peripheral traits plus in-memory mocks
pub mod platform;

// Leaf device wrappers built on the platform traits
pub mod devices;

// Game core: controller state machine, config, durable state
pub mod game;

// Logging macros (defmt on embedded targets, println under host tests)
pub mod logging;
