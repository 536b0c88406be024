//! File-backed tracing setup.
//!
//! The TUI owns stderr, so log output must never reach the terminal. Logs go to
//! `log_file` from config, or `codeiter.log` in the system temp directory.
//! Verbosity follows `CODEITER_LOG` (EnvFilter syntax), default `info`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CODEITER_LOG";

/// Default log location when config does not name one.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("codeiter.log")
}

/// Installs the global subscriber writing to `path`.
///
/// The returned guard flushes buffered lines on drop; hold it for the life of
/// `main`. Returns `None` if a subscriber was already installed.
pub fn init(path: &Path) -> Option<WorkerGuard> {
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path.file_name().map(|f| f.to_owned()).unwrap_or_else(|| "codeiter.log".into());
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|()| guard)
}
