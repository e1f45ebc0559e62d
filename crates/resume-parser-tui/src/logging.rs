//! File-only tracing setup. The terminal belongs to the UI, so nothing is
//! ever written to stdout or stderr while it runs.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "resume-parser.log";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("cannot create log directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// `<cache_dir>/resume-parser/logs`, or `./logs` when there is no cache dir.
pub fn default_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resume-parser")
        .join("logs")
}

/// `RUST_LOG` wins over the configured level; an unparsable level falls
/// back to `info`.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to a daily rolling file in `dir`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// for the life of the program.
pub fn init(level: &str, dir: &Path) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_is_namespaced() {
        assert!(default_log_dir().ends_with("resume-parser/logs"));
    }

    #[test]
    fn unusable_log_dir_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let dir = blocker.join("logs");

        let Err(LoggingError::CreateDir { path, .. }) = init("info", &dir) else {
            panic!("expected a directory creation error");
        };
        assert_eq!(path, dir);
    }
}
