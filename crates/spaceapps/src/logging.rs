//! File logging via `tracing`.
//!
//! The terminal belongs to the UI, so log records go to `spaceapps.log` in the
//! platform data directory instead of stdout/stderr.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use spaceapps_config::{Config, LogConfig};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "spaceapps.log";
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber. Returns the log file path, or `None` when
/// there is nowhere to write logs (logging then stays disabled).
pub fn init(config: &LogConfig) -> Option<PathBuf> {
    let dir = Config::data_dir()?;
    let (path, file) = create_log_file(&dir).ok()?;

    // RUST_LOG wins over the configured level.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_for(&config.level));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(path)
}

/// Filter for a configured level, falling back to `info` when it does not
/// parse.
fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Create the log directory and truncate the log file.
fn create_log_file(dir: &Path) -> io::Result<(PathBuf, File)> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = File::create(&path)?;
    Ok((path, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_for_configured_level() {
        let filter = filter_for("debug,spaceapps_background=trace");
        let filter_str = format!("{filter}");
        assert!(filter_str.contains("debug"));
        assert!(filter_str.contains("spaceapps_background=trace"));
    }

    #[test]
    fn test_create_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs");

        let (path, _file) = create_log_file(&nested).unwrap();
        assert_eq!(path, nested.join(LOG_FILE));
        assert!(path.exists());
    }
}
