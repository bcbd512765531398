//! Input module - keyboard handling and per-frame arbitration
//!
//! Two independently-timed sources feed one decision per frame: the device
//! event channel is drained to empty (last button wins) and the keyboard is
//! polled once (keyboard wins over queued device input). Neither operation
//! ever blocks the frame loop.

pub mod arbiter;
pub mod keyboard;
pub mod map;

pub use arbiter::poll_frame;
pub use keyboard::{CrosstermKeys, KeyPoll};
pub use map::map_key_event;
