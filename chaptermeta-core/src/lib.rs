//! Core library for deriving audiobook chapter metadata with ffprobe.
//!
//! Given a directory of per-chapter audio files, this crate discovers the
//! files, probes each one for its duration and tags, lays the chapters end to
//! end on a millisecond timeline and renders an FFMETADATA1 document that
//! ffmpeg can merge into the final audiobook.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use chaptermeta_core::{CoreConfig, FfprobeProber, generate_metadata_file};
//! use chaptermeta_core::reporting::NullReporter;
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(
//!     PathBuf::from("./original"),
//!     PathBuf::from("./build/book.ffmeta"),
//! );
//! let prober = FfprobeProber::new(&config.ffprobe_path);
//!
//! let run = generate_metadata_file(&config, &prober, &NullReporter).unwrap();
//! println!("{} chapters", run.timeline.chapters().len());
//! ```

pub mod chapters;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod ffmetadata;
pub mod file_logging;
pub mod output;
pub mod reporting;

// Re-exports for public API
pub use chapters::{Chapter, ChapterTimeline, duration_to_ms};
pub use config::CoreConfig;
pub use discovery::find_chapter_files;
pub use error::{CoreError, CoreResult};
pub use external::{FfprobeProber, MediaProber, ProbeResult, TagMap};
pub use ffmetadata::{MetadataDocument, RenderOptions};
pub use output::write_metadata_file;

use reporting::{FileProgress, Reporter};
use std::path::PathBuf;

/// Everything a run produced, in chapter order.
#[derive(Debug, Clone)]
pub struct MetadataRun {
    pub files: Vec<PathBuf>,
    pub timeline: ChapterTimeline,
    pub document: MetadataDocument,
}

/// Discovers, probes and renders, without touching the output path.
///
/// Files are probed one at a time in sorted order; the first failure aborts
/// the run. Fails with [`CoreError::NoFilesFound`] before probing anything
/// when the input directory holds no chapter files.
pub fn build_metadata<P>(
    config: &CoreConfig,
    prober: &P,
    reporter: &dyn Reporter,
) -> CoreResult<MetadataRun>
where
    P: MediaProber + ?Sized,
{
    config.validate()?;

    let files = find_chapter_files(&config.input_dir, &config.extension)?;
    let total = files.len();

    reporter.probing_started(total);

    let mut probes = Vec::with_capacity(total);
    for (i, path) in files.iter().enumerate() {
        let progress = FileProgress { current: i + 1, total };
        reporter.file_probing(path, progress);

        let result = prober.probe(path)?;
        log::debug!(
            "Probed {}: {:.3} s, title '{}', {} tags",
            path.display(),
            result.duration_seconds,
            result.title_hint,
            result.tags.len()
        );

        reporter.file_probed(path, &result, progress);
        probes.push(result);
    }

    reporter.probing_complete();

    let timeline = ChapterTimeline::from_probes(&probes);
    let document = MetadataDocument::render(
        &timeline,
        RenderOptions {
            escape_values: config.escape_values,
        },
    );

    log::info!(
        "Built {} chapters totalling {} ms",
        timeline.chapters().len(),
        timeline.total_ms()
    );

    Ok(MetadataRun {
        files,
        timeline,
        document,
    })
}

/// Runs [`build_metadata`] and writes the document to `config.output_path`.
///
/// Nothing is written when any earlier step fails.
pub fn generate_metadata_file<P>(
    config: &CoreConfig,
    prober: &P,
    reporter: &dyn Reporter,
) -> CoreResult<MetadataRun>
where
    P: MediaProber + ?Sized,
{
    let run = build_metadata(config, prober, reporter)?;
    write_metadata_file(&config.output_path, run.document.as_str())?;
    log::info!("Metadata written to {}", config.output_path.display());
    Ok(run)
}
