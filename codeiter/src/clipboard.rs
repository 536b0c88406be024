//! Clipboard backends for the copy action.
//!
//! The native clipboard needs a display server; OSC 52 needs a terminal that
//! honours it. `auto` tries native first and falls back to OSC 52, so copying
//! works both locally and over SSH.

use std::io::stderr;

use codeiter_core::clipboard::{ClipboardWriter, Osc52Writer};
use codeiter_core::ClipboardError;

use crate::config::ClipboardChoice;

/// System clipboard through `arboard`.
///
/// The handle is opened lazily on first use and kept: on X11 the clipboard
/// contents are owned by the process and vanish when the handle is dropped.
#[derive(Default)]
pub struct NativeClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ClipboardWriter for NativeClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not initialised".into()));
        };
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }
}

/// Tries `primary`, then `secondary` when the first one fails.
pub struct FallbackClipboard<P, S> {
    primary: P,
    secondary: S,
}

impl<P: ClipboardWriter, S: ClipboardWriter> FallbackClipboard<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: ClipboardWriter, S: ClipboardWriter> ClipboardWriter for FallbackClipboard<P, S> {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.primary.write(text) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::debug!(error = %err, "primary clipboard failed, trying fallback");
                self.secondary.write(text)
            }
        }
    }
}

/// Builds the clipboard selected in config. OSC 52 output goes to stderr,
/// the stream the TUI draws on.
pub fn from_choice(choice: ClipboardChoice) -> Box<dyn ClipboardWriter> {
    match choice {
        ClipboardChoice::Auto => Box::new(FallbackClipboard::new(
            NativeClipboard::default(),
            Osc52Writer::new(stderr()),
        )),
        ClipboardChoice::Native => Box::new(NativeClipboard::default()),
        ClipboardChoice::Osc52 => Box::new(Osc52Writer::new(stderr())),
    }
}
