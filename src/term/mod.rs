//! Terminal rendering module.
//!
//! Two halves: a pure view that lays the round state out as positioned
//! text lines (unit-testable, no I/O), and a renderer that owns the
//! terminal lifecycle and flushes those lines each frame.

pub mod game_view;
pub mod renderer;

pub use game_view::{Emphasis, GameView, TextLine, Viewport};
pub use renderer::TerminalRenderer;
