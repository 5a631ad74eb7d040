// ============================================================================
// chaptermeta-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with the ffprobe Command-Line Tool
//
// This module encapsulates the probe adapter: the only place where the
// library talks to an external process. The pipeline depends on the
// `MediaProber` trait, not on ffprobe directly, so tests can drive it with
// in-memory probe results.
//
// KEY COMPONENTS:
// - ProbeResult / TagMap: what a probe yields for one file
// - MediaProber: trait implemented by the ffprobe adapter and by test fakes
//
// AI-ASSISTANT-INFO: External tool interactions and abstractions for ffprobe

// ---- Internal crate imports ----
use crate::error::CoreResult;

// ---- Standard library imports ----
use std::collections::BTreeMap;
use std::path::Path;

// ============================================================================
// SUBMODULES
// ============================================================================

/// ffprobe invocation and report parsing
pub mod ffprobe_executor;

pub use ffprobe_executor::{FfprobeProber, parse_probe_report};

// ============================================================================
// PROBE RESULT
// ============================================================================

/// Format-level tags of a media file. Absent keys are simply missing;
/// an empty string value is kept as-is and filtered later.
pub type TagMap = BTreeMap<String, String>;

/// Duration and tag data extracted from one chapter file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    /// Container duration in seconds
    pub duration_seconds: f64,

    /// Container-level tags, empty when the file has none
    pub tags: TagMap,

    /// Chapter title: the `title` tag when present and non-empty,
    /// otherwise the file name without its extension
    pub title_hint: String,
}

impl ProbeResult {
    /// Builds a probe result, deriving the title hint from `tags` and `path`.
    pub fn new(path: &Path, duration_seconds: f64, tags: TagMap) -> Self {
        let title_hint = derive_title(path, &tags);
        Self {
            duration_seconds,
            tags,
            title_hint,
        }
    }
}

/// Returns the `title` tag if it is non-empty, else the file stem.
#[must_use]
pub fn derive_title(path: &Path, tags: &TagMap) -> String {
    tags.get("title")
        .filter(|title| !title.is_empty())
        .cloned()
        .unwrap_or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
}

// ============================================================================
// PROBER TRAIT
// ============================================================================

/// Something that can report the duration and tags of a media file.
///
/// # Examples
///
/// ```rust
/// use chaptermeta_core::CoreResult;
/// use chaptermeta_core::external::{MediaProber, ProbeResult, TagMap};
/// use std::path::Path;
///
/// struct FixedProber;
///
/// impl MediaProber for FixedProber {
///     fn probe(&self, path: &Path) -> CoreResult<ProbeResult> {
///         Ok(ProbeResult::new(path, 60.0, TagMap::new()))
///     }
/// }
///
/// let result = FixedProber.probe(Path::new("01 Intro.mp3")).unwrap();
/// assert_eq!(result.title_hint, "01 Intro");
/// ```
pub trait MediaProber {
    /// Probes one file. Any failure is fatal for the run.
    fn probe(&self, path: &Path) -> CoreResult<ProbeResult>;
}
