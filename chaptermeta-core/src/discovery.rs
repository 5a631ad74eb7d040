//! File discovery module for finding chapter files to probe.
//!
//! Scans the top level of the input directory for regular files carrying the
//! configured extension and returns them in chapter order: a plain,
//! case-sensitive comparison of file names. `10.mp3` therefore sorts before
//! `2.mp3`; zero-pad chapter numbers to get the intended order.
//!
//! This is stricter than a plain file-name suffix match: dot-files such as
//! `.x.mp3` or a file named exactly `.mp3` are never treated as chapters.

use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};

/// Returns true when `path` names a file whose extension equals `extension` exactly.
#[must_use]
pub fn has_chapter_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == extension)
}

/// Finds chapter files in the top level of `input_dir`, sorted by file name.
///
/// Hidden files and directories are skipped. Fails with
/// [`CoreError::NoFilesFound`] when nothing matches, before any probing.
pub fn find_chapter_files(input_dir: &Path, extension: &str) -> CoreResult<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(CoreError::PathError(format!(
            "{} is not a directory",
            input_dir.display()
        )));
    }

    let read_dir = std::fs::read_dir(input_dir).map_err(|e| {
        CoreError::PathError(format!(
            "Cannot read directory {}: {}",
            input_dir.display(),
            e
        ))
    })?;

    let mut files: Vec<(String, PathBuf)> = Vec::new();
    let mut skipped_count = 0;

    for entry_result in read_dir {
        let entry = entry_result?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            log::warn!("Skipping file with non UTF-8 name: {}", path.display());
            skipped_count += 1;
            continue;
        };

        if filename.starts_with('.') {
            continue;
        }

        if has_chapter_extension(&path, extension) {
            files.push((filename.to_string(), path));
        } else {
            skipped_count += 1;
        }
    }

    if skipped_count > 0 {
        log::debug!(
            "Skipped {} non-chapter files in {}",
            skipped_count,
            input_dir.display()
        );
    }

    if files.is_empty() {
        return Err(CoreError::NoFilesFound {
            dir: input_dir.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    files.sort_by(|(a, _), (b, _)| a.cmp(b));

    log::info!(
        "Found {} chapter files in {}",
        files.len(),
        input_dir.display()
    );

    Ok(files.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_is_case_sensitive() {
        assert!(has_chapter_extension(Path::new("01.mp3"), "mp3"));
        assert!(!has_chapter_extension(Path::new("01.MP3"), "mp3"));
        assert!(!has_chapter_extension(Path::new("01.mp3.txt"), "mp3"));
        assert!(!has_chapter_extension(Path::new("mp3"), "mp3"));
    }
}
