//! ffprobe integration for chapter duration and tag extraction.
//!
//! Runs `ffprobe` once per file with a quiet JSON report of the container
//! format and streams. Only `format.duration` and `format.tags` are read.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::external::{MediaProber, ProbeResult, TagMap};

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Arguments passed to ffprobe ahead of the file path.
pub const FFPROBE_ARGS: [&str; 6] = [
    "-v",
    "quiet",
    "-print_format",
    "json",
    "-show_format",
    "-show_streams",
];

// --- Structs for ffprobe JSON output ---

#[derive(Deserialize, Debug)]
struct FfprobeFormat {
    duration: Option<String>,
    #[serde(default)]
    tags: Option<BTreeMap<String, Value>>,
}

#[derive(Deserialize, Debug)]
struct FfprobeOutput {
    format: Option<FfprobeFormat>,
}

/// Probe adapter backed by the `ffprobe` executable.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    ffprobe_path: PathBuf,
}

impl FfprobeProber {
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    fn command_name(&self) -> String {
        self.ffprobe_path.display().to_string()
    }
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FFPROBE_PATH)
    }
}

impl MediaProber for FfprobeProber {
    fn probe(&self, path: &Path) -> CoreResult<ProbeResult> {
        let cmd_name = self.command_name();
        log::debug!("Running {} on {}", cmd_name, path.display());

        let output = Command::new(&self.ffprobe_path)
            .args(FFPROBE_ARGS)
            .arg(path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| command_start_error(cmd_name.clone(), e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            log::debug!("ffprobe failed on {}: {}", path.display(), stderr.trim());
            return Err(command_failed_error(
                format!("{} {}", cmd_name, path.display()),
                output.status,
                stderr.trim().to_string(),
            ));
        }

        log::trace!(
            "ffprobe output for {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stdout)
        );

        parse_probe_report(path, &output.stdout)
    }
}

/// Parses an ffprobe JSON report into a [`ProbeResult`] for `path`.
///
/// `format.duration` must be present and a positive, finite number of
/// seconds. Missing `format.tags` yields an empty tag map. Numeric and
/// boolean tag values are kept in their JSON text form; null, array and
/// object values are dropped.
pub fn parse_probe_report(path: &Path, report: &[u8]) -> CoreResult<ProbeResult> {
    let parse_error = |message: String| CoreError::ProbeParse {
        path: path.to_path_buf(),
        message,
    };

    let output: FfprobeOutput =
        serde_json::from_slice(report).map_err(|e| parse_error(format!("invalid JSON: {e}")))?;

    let format = output
        .format
        .ok_or_else(|| parse_error("report has no format section".to_string()))?;

    let raw_duration = format
        .duration
        .ok_or_else(|| parse_error("format.duration is missing".to_string()))?;

    let duration_seconds = raw_duration
        .trim()
        .parse::<f64>()
        .map_err(|_| parse_error(format!("format.duration '{raw_duration}' is not a number")))?;

    if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
        return Err(parse_error(format!(
            "format.duration must be positive, got {raw_duration}"
        )));
    }

    let tags: TagMap = format
        .tags
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            Value::Number(n) => Some((key, n.to_string())),
            Value::Bool(b) => Some((key, b.to_string())),
            _ => None,
        })
        .collect();

    Ok(ProbeResult::new(path, duration_seconds, tags))
}
