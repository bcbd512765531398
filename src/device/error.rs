//! Device error types.
//!
//! The `Display` strings double as the user-facing error text published in
//! `InputEvent::Error` payloads, so they are written for the screen.

use thiserror::Error;

/// Failures of the device byte source. Both variants are terminal for the
/// listener that hit them; neither stops the game.
#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("Failed to open serial port {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Serial read error: {0}")]
    Read(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_display_text() {
        let err = DeviceError::Read(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "device unplugged",
        ));
        assert_eq!(err.to_string(), "Serial read error: device unplugged");
    }
}
