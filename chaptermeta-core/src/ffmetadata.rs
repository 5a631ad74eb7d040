//! FFMETADATA1 rendering.
//!
//! Produces the text document ffmpeg reads through `-i book.ffmeta
//! -map_metadata 1`: a header, the book-level tags, the audiobook media type
//! marker and one `[CHAPTER]` block per chapter with a 1/1000 timebase.

use crate::chapters::ChapterTimeline;
use std::fmt::Write as _;

/// First line of every document.
pub const FFMETADATA_HEADER: &str = ";FFMETADATA1";

/// `media_type` value marking the output as an audiobook.
pub const AUDIOBOOK_MEDIA_TYPE: u8 = 2;

/// Book-level keys written to the document, as `(output key, source tag)`,
/// in output order. The book title is taken from the source `album` tag:
/// per-file `title` tags name chapters, not the book.
pub const BOOK_TAG_MAP: [(&str, &str); 7] = [
    ("title", "album"),
    ("artist", "artist"),
    ("album_artist", "album_artist"),
    ("genre", "genre"),
    ("date", "date"),
    ("copyright", "copyright"),
    ("comment", "comment"),
];

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `=`, `;`, `#`, `\` and newlines in values with a backslash.
    pub escape_values: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { escape_values: true }
    }
}

/// A rendered FFMETADATA1 document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataDocument {
    text: String,
}

impl MetadataDocument {
    /// Renders `timeline` into a document.
    pub fn render(timeline: &ChapterTimeline, options: RenderOptions) -> Self {
        let value = |raw: &str| -> String {
            if options.escape_values {
                escape_value(raw)
            } else {
                raw.to_string()
            }
        };

        let mut out = String::new();
        out.push_str(FFMETADATA_HEADER);
        out.push('\n');

        let book_tags = timeline.book_tags();
        for (dst, src) in BOOK_TAG_MAP {
            if let Some(tag) = book_tags.get(src).filter(|v| !v.is_empty()) {
                // Infallible: writing into a String.
                let _ = writeln!(out, "{}={}", dst, value(tag));
            }
        }

        let _ = writeln!(out, "media_type={AUDIOBOOK_MEDIA_TYPE}");
        out.push('\n');

        for chapter in timeline.chapters() {
            out.push_str("[CHAPTER]\n");
            out.push_str("TIMEBASE=1/1000\n");
            let _ = writeln!(out, "START={}", chapter.start_ms);
            let _ = writeln!(out, "END={}", chapter.end_ms);
            let _ = writeln!(out, "title={}", value(&chapter.title));
            out.push('\n');
        }

        Self { text: out }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl std::fmt::Display for MetadataDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Backslash-escapes the characters FFMETADATA1 treats as syntax.
#[must_use]
pub fn escape_value(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '=' | ';' | '#' | '\\' | '\n') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::ProbeResult;
    use std::path::Path;

    fn probe(file: &str, seconds: f64, tags: &[(&str, &str)]) -> ProbeResult {
        let tags = tags
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ProbeResult::new(Path::new(file), seconds, tags)
    }

    fn render(probes: &[ProbeResult], escape_values: bool) -> String {
        let timeline = ChapterTimeline::from_probes(probes);
        MetadataDocument::render(&timeline, RenderOptions { escape_values }).into_string()
    }

    #[test]
    fn renders_two_chapter_book() {
        let probes = [
            probe("01.mp3", 65.4, &[("title", "Chapter One"), ("artist", "Jane Doe")]),
            probe("02.mp3", 30.0, &[("title", "Chapter Two")]),
        ];

        let expected = "\
;FFMETADATA1
artist=Jane Doe
media_type=2

[CHAPTER]
TIMEBASE=1/1000
START=0
END=65400
title=Chapter One

[CHAPTER]
TIMEBASE=1/1000
START=65400
END=95400
title=Chapter Two

";
        assert_eq!(render(&probes, true), expected);
        assert!(!render(&probes, true).contains("genre="));
    }

    #[test]
    fn book_tags_follow_fixed_order_and_album_becomes_title() {
        let probes = [probe(
            "01.mp3",
            1.0,
            &[
                ("comment", "Read by the author"),
                ("date", "2021"),
                ("album", "The Book"),
                ("genre", "Fiction"),
                ("album_artist", "A. Writer"),
                ("artist", "A. Writer"),
                ("copyright", "(c) 2021"),
                ("title", "Prologue"),
                ("encoder", "LAME"),
            ],
        )];

        let text = render(&probes, true);
        let header: Vec<&str> = text.lines().take_while(|l| !l.is_empty()).collect();
        assert_eq!(
            header,
            vec![
                ";FFMETADATA1",
                "title=The Book",
                "artist=A. Writer",
                "album_artist=A. Writer",
                "genre=Fiction",
                "date=2021",
                "copyright=(c) 2021",
                "comment=Read by the author",
                "media_type=2",
            ]
        );
    }

    #[test]
    fn empty_and_missing_tags_are_skipped() {
        let probes = [probe("01.mp3", 1.0, &[("genre", ""), ("date", "1999")])];

        let text = render(&probes, true);
        assert!(!text.contains("genre="));
        assert!(!text.contains("artist="));
        assert!(text.contains("date=1999\n"));
    }

    #[test]
    fn chapter_title_falls_back_to_file_stem() {
        let probes = [probe("07 The Storm.mp3", 2.0, &[])];
        assert!(render(&probes, true).contains("title=07 The Storm\n"));
    }

    #[test]
    fn special_characters_are_escaped_by_default() {
        let probes = [probe("01.mp3", 1.0, &[("title", "a=b; #1 \\ end"), ("artist", "x\ny")])];

        let text = render(&probes, true);
        assert!(text.contains("title=a\\=b\\; \\#1 \\\\ end\n"));
        assert!(text.contains("artist=x\\\ny\n"));
    }

    #[test]
    fn raw_values_are_emitted_verbatim() {
        let probes = [probe("01.mp3", 1.0, &[("title", "a=b; #1")])];
        assert!(render(&probes, false).contains("title=a=b; #1\n"));
    }

    #[test]
    fn plain_values_are_identical_with_and_without_escaping() {
        let probes = [
            probe("01.mp3", 12.5, &[("title", "One"), ("album", "Book"), ("artist", "Me")]),
            probe("02.mp3", 7.25, &[]),
        ];
        assert_eq!(render(&probes, true), render(&probes, false));
    }
}
