//! codeiter-core — UI-agnostic logic for the codeiter client.
//!
//! Holds the form controller and everything it depends on: the wire types of
//! the `/process_code` endpoint, the HTTP client, the line diff, toasts and the
//! clipboard capability. The `codeiter` binary layers a terminal UI on top.

pub mod client;
pub mod clipboard;
pub mod controller;
pub mod diff;
pub mod error;
pub mod toast;
pub mod types;

pub use client::ProcessClient;
pub use clipboard::{ClipboardWriter, Osc52Writer};
pub use controller::{Effect, FormController, PanelContent, Tab, Trigger, View};
pub use error::{ClipboardError, RequestError, ValidationError};
pub use types::{Model, ProcessRequest, ProcessResponse};
