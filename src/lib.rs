//! TUI Reflex - a terminal reaction-time game.
//!
//! A round prompts one of four directions; the player answers within the
//! reaction window via a serial button pad (line-oriented UP/DOWN/LEFT/RIGHT
//! tokens) or the keyboard. The crate splits into a pure core (round state
//! machine + RNG), a device layer (background serial reader publishing onto
//! an event channel), an input layer (per-frame arbitration of device and
//! keyboard input), and a thin terminal rendering layer.

pub mod config;
pub mod core;
pub mod device;
pub mod input;
pub mod term;
pub mod types;
