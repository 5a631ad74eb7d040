// ============================================================================
// chaptermeta-cli/src/logging.rs
// ============================================================================
//
// LOGGING UTILITIES: Logger Setup for the CLI
//
// Console logging goes through env_logger and honours RUST_LOG. With
// --log-dir, the run log is written through log4rs instead (see
// chaptermeta_core::file_logging).
//
// AI-ASSISTANT-INFO: Logging setup and helper functions

use chaptermeta_core::CoreError;
use chaptermeta_core::file_logging::run_log_path;
use chaptermeta_core::file_logging::setup::setup_file_logging;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::error::CliResult;

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Debug when verbose, Info otherwise.
pub fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes env_logger on stderr. RUST_LOG takes precedence over `level`.
pub fn init_console_logging(level: LevelFilter) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str()),
    )
    .format_target(false)
    .try_init();
}

/// Creates `log_dir` and routes logging to a timestamped run log inside it.
/// Returns the log file path.
pub fn init_file_logging(log_dir: &Path, level: LevelFilter) -> CliResult<PathBuf> {
    let log_path = run_log_path(log_dir, &get_timestamp());

    std::fs::create_dir_all(log_dir).map_err(|e| {
        CoreError::OperationFailed(format!(
            "Failed to create log directory: {}: {}",
            log_dir.display(),
            e
        ))
    })?;

    setup_file_logging(&log_path, level).map_err(|e| {
        CoreError::OperationFailed(format!(
            "Failed to set up file logging to {}: {}",
            log_path.display(),
            e
        ))
    })?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_shape() {
        let ts = get_timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(ts.as_bytes()[8], b'_');
        assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Info);
    }
}
