//! Core module - pure game logic with no external dependencies
//!
//! This module contains the round state machine and its RNG.
//! It has zero dependencies on UI, devices, or I/O.

pub mod rng;
pub mod round;

// Re-export commonly used types
pub use rng::SimpleRng;
pub use round::{RoundEngine, RoundSnapshot};
