//! Device module - serial button pad input
//!
//! A background thread owns the serial handle, frames the byte stream into
//! direction tokens and publishes them (and connection errors) onto an mpsc
//! channel. The main loop never blocks on the device: it drains the channel
//! non-blockingly each frame and keeps playing keyboard-only if the
//! listener dies.

pub mod error;
pub mod framer;
pub mod listener;

pub use error::DeviceError;
pub use framer::LineFramer;
pub use listener::{serial_opener, ByteSource, DeviceListener, SourceOpener};
