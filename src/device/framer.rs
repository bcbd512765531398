//! Line framer - byte stream to direction tokens
//!
//! Accumulates raw bytes and emits one token per completed line. Lines are
//! decoded leniently (invalid UTF-8 is substituted, never an error),
//! trimmed, upper-cased and matched against the four-direction vocabulary;
//! everything else is silently discarded. The pad firmware shares the line
//! with debug chatter, so dropping unknown lines is policy, not a bug.

use crate::types::Direction;

/// Stateful newline framer. Retains the trailing partial line across
/// `feed` calls.
#[derive(Debug, Default)]
pub struct LineFramer {
    buf: Vec<u8>,
}

impl LineFramer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk of bytes, returning the directions recognized on
    /// every line completed by this chunk, in arrival order.
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<Direction> {
        self.buf.extend_from_slice(bytes);

        let mut tokens = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            // Drop the newline itself; trim handles any \r and padding.
            let text = String::from_utf8_lossy(&line[..pos]);
            let token = text.trim().to_ascii_uppercase();
            if let Some(dir) = Direction::from_token(&token) {
                tokens.push(dir);
            }
        }
        tokens
    }

    /// Bytes of the pending partial line.
    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}
