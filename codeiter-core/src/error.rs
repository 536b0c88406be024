//! Error types for codeiter-core.
//!
//! Nothing here is fatal to the client: every variant ends up as a toast and the
//! form returns to an interactive state.

use thiserror::Error;

/// Fallback message used when the backend fails without an `error` field.
pub const UNKNOWN_SERVER_ERROR: &str = "Unknown server error";

/// Client-side input validation failure. Detected before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some code to improve.")]
    EmptyCode,
    #[error("Please describe what improvements you want.")]
    EmptyPrompt,
}

/// Failure of the `/process_code` round trip.
///
/// `Display` yields the bare message; the controller prefixes it with `Error: `.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Non-success status. Carries the server's `error` field, or
    /// [`UNKNOWN_SERVER_ERROR`] when the body had none.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The body could not be decoded as the expected JSON shape.
    #[error("{0}")]
    Decode(#[source] serde_json::Error),
    /// Connection, TLS or timeout failure before a response arrived.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// Clipboard write failure.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(#[from] std::io::Error),
    #[error("clipboard payload too large ({0} bytes encoded)")]
    TooLarge(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_bare_message() {
        let err = RequestError::Server { status: 500, message: "model offline".into() };
        assert_eq!(err.to_string(), "model offline");
    }

    #[test]
    fn validation_messages_match_the_form_prompts() {
        assert_eq!(ValidationError::EmptyCode.to_string(), "Please enter some code to improve.");
        assert_eq!(
            ValidationError::EmptyPrompt.to_string(),
            "Please describe what improvements you want."
        );
    }
}
