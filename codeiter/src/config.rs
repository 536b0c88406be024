//! User configuration for codeiter.
//!
//! Read once at startup from `$XDG_CONFIG_HOME/codeiter/config.toml`
//! (falling back to `~/.config/codeiter/config.toml`). Every key is optional and
//! config errors are soft: they are logged and the defaults are used.

use std::path::{Path, PathBuf};
use std::time::Duration;

use codeiter_core::Model;
use serde::Deserialize;

/// Default backend address: the development server binds port 5000.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Environment variable overriding `base_url`.
pub const BASE_URL_ENV: &str = "CODEITER_BASE_URL";

/// Which clipboard mechanism the copy action uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardChoice {
    /// Native clipboard, OSC 52 when the native one is unavailable.
    #[default]
    Auto,
    Native,
    Osc52,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub theme: String,
    pub default_model: Option<String>,
    /// Request timeout in seconds; `0` disables the timeout.
    pub request_timeout_secs: u64,
    pub clipboard: ClipboardChoice,
    pub log_file: Option<PathBuf>,
    /// Replaces the built-in model catalogue when non-empty.
    pub models: Vec<Model>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            theme: "catppuccin-mocha".to_owned(),
            default_model: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            clipboard: ClipboardChoice::default(),
            log_file: None,
            models: Vec::new(),
        }
    }
}

impl Config {
    /// `None` when the timeout is disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    /// Applies environment overrides on top of the file values.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_owned();
            }
        }
        self
    }
}

/// Returns the path to the codeiter config file.
///
/// Prefers `$XDG_CONFIG_HOME/codeiter/config.toml`; falls back to
/// `~/.config/codeiter/config.toml` when the env var is absent.
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("codeiter").join("config.toml")
}

/// Loads the config at `path`.
///
/// Returns defaults if the file does not exist or cannot be parsed. Never
/// panics.
pub fn load_from(path: &Path) -> Config {
    let raw = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(_) => return Config::default(),
    };
    match toml::from_str::<Config>(&raw) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "config parse error, using defaults");
            Config::default()
        }
    }
}
