// ============================================================================
// chaptermeta-core/src/chapters.rs
// ============================================================================
//
// CHAPTER ACCUMULATION: Building the Audiobook Timeline
//
// Folds the ordered probe results into contiguous chapters on a single
// millisecond timeline and captures the book-level tags from the first file.
//
// KEY COMPONENTS:
// - Chapter: one named time range
// - ChapterTimeline: the immutable result of the fold
// - duration_to_ms: seconds to whole milliseconds
//
// AI-ASSISTANT-INFO: Chapter offset accumulation for chaptermeta

use crate::external::{ProbeResult, TagMap};

/// A named time range within the concatenated audiobook, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub start_ms: u64,
    pub end_ms: u64,
}

/// Ordered chapters plus the tags of the first chapter file.
///
/// Each chapter starts exactly where the previous one ends. A file shorter
/// than half a millisecond still gets a chapter, with `end_ms == start_ms`,
/// and a warning is logged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChapterTimeline {
    chapters: Vec<Chapter>,
    book_tags: TagMap,
}

impl ChapterTimeline {
    /// Folds probe results, in chapter order, into a timeline.
    ///
    /// Book tags come from the first result only, even when its tag map is
    /// empty and later files carry richer tags.
    pub fn from_probes<'a, I>(probes: I) -> Self
    where
        I: IntoIterator<Item = &'a ProbeResult>,
    {
        let mut book_tags: Option<TagMap> = None;
        let mut offset = 0u64;

        let chapters = probes
            .into_iter()
            .map(|probe| {
                let duration_ms = duration_to_ms(probe.duration_seconds);
                if duration_ms == 0 {
                    log::warn!(
                        "Chapter '{}' rounds to 0 ms ({} s)",
                        probe.title_hint,
                        probe.duration_seconds
                    );
                }

                book_tags.get_or_insert_with(|| probe.tags.clone());

                let chapter = Chapter {
                    title: probe.title_hint.clone(),
                    start_ms: offset,
                    end_ms: offset + duration_ms,
                };
                offset = chapter.end_ms;
                chapter
            })
            .collect();

        Self {
            chapters,
            book_tags: book_tags.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Tags captured from the first chapter file.
    #[must_use]
    pub fn book_tags(&self) -> &TagMap {
        &self.book_tags
    }

    /// End of the last chapter, or 0 for an empty timeline.
    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.chapters.last().map_or(0, |c| c.end_ms)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }
}

/// Converts seconds to whole milliseconds, rounding half away from zero.
/// Negative and non-finite inputs map to 0.
#[must_use]
pub fn duration_to_ms(seconds: f64) -> u64 {
    let ms = (seconds * 1000.0).round();
    if ms.is_finite() && ms > 0.0 {
        ms as u64
    } else {
        0
    }
}
