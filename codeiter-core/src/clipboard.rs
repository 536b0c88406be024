//! Clipboard capability.
//!
//! The controller only needs "put this text on the clipboard, tell me if it
//! worked". [`Osc52Writer`] is the most portable mechanism for a terminal
//! client: the escape sequence travels through SSH and multiplexers to the
//! terminal emulator, which sets the system clipboard. Native backends live in
//! the binary crate.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ClipboardError;

/// Largest encoded OSC 52 payload we emit. Several terminals silently drop
/// longer sequences, which would otherwise be reported as a successful copy.
pub const OSC52_MAX_ENCODED: usize = 100_000;

/// Synchronous clipboard write with success/failure reporting.
pub trait ClipboardWriter {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Builds the OSC 52 "set clipboard" sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

/// Writes OSC 52 sequences to `out` (normally the terminal's stderr).
pub struct Osc52Writer<W: Write> {
    out: W,
}

impl<W: Write> Osc52Writer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardWriter for Osc52Writer<W> {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let seq = osc52_sequence(text);
        // "\x1b]52;c;" + "\x1b\\"
        let encoded_len = seq.len() - 9;
        if encoded_len > OSC52_MAX_ENCODED {
            return Err(ClipboardError::TooLarge(encoded_len));
        }
        self.out.write_all(seq.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
