//! Logging setup.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

const DEFAULT_LOG_FILE: &str = "heatmaps.log";

/// Setup logging with the given level.
///
/// When `file` is set, JSON lines are also written to a daily rolling file
/// next to it. Keep the returned guard alive for the life of the process or
/// buffered lines are lost.
pub fn setup_logging(level: &str, json: bool, file: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    let stdout = if json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().pretty().boxed()
    };

    let (file_layer, guard) = match file {
        Some(path) => {
            let (dir, prefix) = log_file_parts(path);
            let appender = tracing_appender::rolling::daily(dir, prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout)
        .with(file_layer)
        .init();

    guard
}

/// Split a log file path into the rolling appender's directory and prefix.
pub fn log_file_parts(path: &Path) -> (PathBuf, OsString) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let prefix = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE));
    (dir, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_parts() {
        let (dir, prefix) = log_file_parts(Path::new("logs/heatmaps.log"));
        assert_eq!(dir, PathBuf::from("logs"));
        assert_eq!(prefix, OsString::from("heatmaps.log"));

        let (dir, prefix) = log_file_parts(Path::new("server.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(prefix, OsString::from("server.log"));

        let (dir, prefix) = log_file_parts(Path::new("/"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(prefix, OsString::from(DEFAULT_LOG_FILE));
    }
}
