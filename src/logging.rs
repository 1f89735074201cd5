//! Logging bootstrap.
//!
//! Rotating log files in the app data directory, mirrored to stderr for
//! warnings. Messages are `key=value` events so they stay grep-friendly.

use std::path::Path;

use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::info;

use crate::model::settings::normalize_level;

const LOG_FILE_BASENAME: &str = "day-planner";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Start the logger. Keep the returned handle alive for the process lifetime.
///
/// # Errors
/// - `level` is not one of trace|debug|info|warn|error.
/// - `log_dir` cannot be created or the backend fails to start.
pub fn init_logging(level: &str, log_dir: &Path) -> Result<LoggerHandle, String> {
    let level = normalize_level(level).map_err(|err| err.to_string())?;

    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=app_start module=core status=ok platform={} level={} version={}",
        std::env::consts::OS,
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_level_is_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let err = init_logging("verbose", &log_dir).err().unwrap();

        assert!(err.contains("verbose"), "unexpected error: {err}");
        assert!(!log_dir.exists());
    }

    #[test]
    fn blank_level_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        assert!(init_logging("  ", &log_dir).is_err());
        assert!(!log_dir.exists());
    }

    #[test]
    fn unwritable_log_dir_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let err = init_logging("info", &blocker.join("logs")).err().unwrap();

        assert!(err.contains("failed to create log directory"), "unexpected error: {err}");
    }
}
