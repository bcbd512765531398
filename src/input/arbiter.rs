//! Per-frame input arbitration.
//!
//! Resolution order matters and is fixed: drain every pending device event
//! first (later events overwrite earlier ones), then poll the keyboard
//! once. A keyboard direction therefore beats anything still queued from
//! the device, and a burst of pad presses within one frame collapses to
//! the most recent press. Errors coalesce the same way and only the latest
//! one reaches the screen.

use std::sync::mpsc::Receiver;

use crate::input::keyboard::KeyPoll;
use crate::types::{FrameDecision, InputEvent, KeyCommand};

/// Resolve both input sources into this frame's decision. Never blocks:
/// the channel is drained with `try_recv` and the keyboard poll is
/// zero-timeout. `events` is `None` in keyboard-only mode; a disconnected
/// channel behaves like an empty one.
pub fn poll_frame(events: Option<&Receiver<InputEvent>>, keys: &mut dyn KeyPoll) -> FrameDecision {
    let mut decision = FrameDecision::default();

    if let Some(rx) = events {
        while let Ok(event) = rx.try_recv() {
            match event {
                InputEvent::Button(dir) => decision.action = Some(dir),
                InputEvent::Error(msg) => decision.error = Some(msg),
            }
        }
    }

    match keys.poll() {
        Some(KeyCommand::Quit) => decision.quit = true,
        Some(KeyCommand::Press(dir)) => decision.action = Some(dir),
        None => {}
    }

    decision
}
