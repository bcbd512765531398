//! Non-blocking keyboard poll capability.
//!
//! The frame loop needs at most one key per frame and must never wait for
//! one. `KeyPoll` is that seam; the crossterm implementation polls with a
//! zero timeout and the tests substitute scripted sequences.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::input::map::map_key_event;
use crate::types::KeyCommand;

/// Single non-blocking key poll. Returns immediately with `None` when no
/// recognized key is pending.
pub trait KeyPoll {
    fn poll(&mut self) -> Option<KeyCommand>;
}

/// Crossterm-backed keyboard source.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeyPoll for CrosstermKeys {
    fn poll(&mut self) -> Option<KeyCommand> {
        // Input failures must not halt the loop; treat them as "no key".
        if !event::poll(Duration::ZERO).unwrap_or(false) {
            return None;
        }
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => map_key_event(key),
            _ => None,
        }
    }
}
