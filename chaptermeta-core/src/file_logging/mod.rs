//! Optional run log written through log4rs.

pub mod setup;

use std::path::{Path, PathBuf};

/// Path of the run log for a run started at `timestamp` (`YYYYMMDD_HHMMSS`).
#[must_use]
pub fn run_log_path(log_dir: &Path, timestamp: &str) -> PathBuf {
    log_dir.join(format!("chaptermeta_run_{timestamp}.log"))
}
