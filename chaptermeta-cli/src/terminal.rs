//! Terminal presentation: the probing progress bar and status lines.

use chaptermeta_core::ProbeResult;
use chaptermeta_core::reporting::{FileProgress, Reporter};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Mutex;

/// Reporter that shows a progress bar on stderr while files are probed.
///
/// indicatif hides the bar when stderr is not a terminal.
pub struct TerminalReporter {
    progress: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            progress: Mutex::new(None),
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.progress.lock() {
            if let Some(pb) = guard.as_ref() {
                f(pb);
            }
        }
    }

    fn finish_progress(&self) {
        if let Ok(mut guard) = self.progress.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TerminalReporter {
    fn probing_started(&self, total_files: usize) {
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} Probing [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        if let Ok(mut guard) = self.progress.lock() {
            *guard = Some(pb);
        }
    }

    fn file_probing(&self, path: &Path, _progress: FileProgress) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.with_bar(|pb| pb.set_message(name));
    }

    fn file_probed(&self, _path: &Path, _result: &ProbeResult, _progress: FileProgress) {
        self.with_bar(|pb| pb.inc(1));
    }

    fn probing_complete(&self) {
        self.finish_progress();
    }
}

impl Drop for TerminalReporter {
    fn drop(&mut self) {
        // A failed probe leaves the bar running.
        self.finish_progress();
    }
}

/// Prints the success line.
pub fn print_success(message: &str) {
    println!("{} {}", style("✔").green().bold(), message);
}

/// Prints an error and an optional hint to stderr.
pub fn print_error(message: &str, hint: Option<&str>) {
    eprintln!("{} {}", style("✖").red().bold(), message);
    if let Some(hint) = hint {
        eprintln!("  {} {}", style("hint:").yellow(), hint);
    }
}

/// Prints a `label: value` line with a bold label.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{:<10} {}", style(format!("{label}:")).bold(), value);
}
