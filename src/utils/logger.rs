//! Logging initialization and configuration.
//!
//! Diagnostics go to stderr with the source file and line of every event, so
//! a fatal error always points at the step that produced it. Setting
//! `GPC_LOG_DIR` additionally writes each run to its own log file.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show every lifecycle step and spawned command
//! - `RUST_LOG=info` - Show info and higher level logs (default)
//! - `RUST_LOG=warn` - Show warnings and errors only
//! - `RUST_LOG=error` - Show errors only

use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a directory for per-run log files.
pub const LOG_DIR_VAR: &str = "GPC_LOG_DIR";

/// Initialize the logging system.
///
/// The returned guards flush the file writer when dropped; keep them alive
/// until the process is about to exit.
pub fn init_logging() -> Vec<WorkerGuard> {
    let mut guards = Vec::new();

    // Synchronous so log lines never interleave with a running shell
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_file(true)
        .with_line_number(true);

    let file_layer = std::env::var(LOG_DIR_VAR)
        .ok()
        .filter(|dir| !dir.is_empty())
        .and_then(|dir| open_log_file(Path::new(&dir)))
        .map(|file| {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            guards.push(guard);
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false) // No ANSI colors in log files
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });

    // Default to "info" level if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guards
}

fn open_log_file(dir: &Path) -> Option<fs::File> {
    if let Err(e) = fs::create_dir_all(dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return None;
    }

    let log_path = log_file_path(dir, Local::now());
    match fs::File::create(&log_path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to create log file {}: {}", log_path.display(), e);
            None
        }
    }
}

/// Per-run log file, e.g. `gpc.2024-12-06-14-30-25.log`.
fn log_file_path(dir: &Path, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("gpc.{}.log", now.format("%Y-%m-%d-%H-%M-%S")))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_log_file_path() {
        let now = Local.with_ymd_and_hms(2024, 12, 6, 14, 30, 25).unwrap();
        let path = log_file_path(Path::new("/var/log/gpc"), now);
        assert_eq!(path, PathBuf::from("/var/log/gpc/gpc.2024-12-06-14-30-25.log"));
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("logs");

        assert!(open_log_file(&dir).is_some());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
    }
}
