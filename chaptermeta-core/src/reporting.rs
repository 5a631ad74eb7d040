//! Progress reporting hooks for the metadata pipeline.
//!
//! The pipeline calls a [`Reporter`] as it works through the chapter files.
//! Front ends decide how to present it: the CLI draws a progress bar, tests
//! can record the calls, and [`NullReporter`] ignores them.

use crate::external::ProbeResult;
use std::path::Path;

/// Position of a file within the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileProgress {
    /// 1-based index of the current file
    pub current: usize,
    pub total: usize,
}

/// Reporter interface for pipeline progress. Every method defaults to a no-op.
pub trait Reporter {
    fn probing_started(&self, _total_files: usize) {}
    fn file_probing(&self, _path: &Path, _progress: FileProgress) {}
    fn file_probed(&self, _path: &Path, _result: &ProbeResult, _progress: FileProgress) {}
    fn probing_complete(&self) {}
}

/// No-op reporter that discards all updates.
pub struct NullReporter;

impl Reporter for NullReporter {}
