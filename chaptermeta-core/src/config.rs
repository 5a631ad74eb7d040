//! Configuration structures and constants for the chaptermeta-core library.
//!
//! The defaults reproduce the classic layout: chapter files live in
//! `./original`, the rendered document goes to `./build/book.ffmeta`.

use crate::error::{CoreError, CoreResult};
use std::path::PathBuf;

// Default constants

/// Directory scanned for chapter files when none is given.
pub const DEFAULT_INPUT_DIR: &str = "./original";

/// Path of the rendered FFMETADATA1 document when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./build/book.ffmeta";

/// Extension (without the dot) a file must carry to be treated as a chapter.
/// Matching is case-sensitive.
pub const DEFAULT_EXTENSION: &str = "mp3";

/// ffprobe executable, resolved through `PATH` unless an absolute path is set.
pub const DEFAULT_FFPROBE_PATH: &str = "ffprobe";

/// Main configuration structure for a chaptermeta run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Directory containing the per-chapter audio files
    pub input_dir: PathBuf,

    /// Destination of the FFMETADATA1 document
    pub output_path: PathBuf,

    /// Extension of the chapter files, without the leading dot
    pub extension: String,

    /// ffprobe executable used by the probe adapter
    pub ffprobe_path: PathBuf,

    /// Backslash-escape FFMETADATA1 special characters in tag and title values.
    /// When false, values are emitted verbatim.
    pub escape_values: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            extension: DEFAULT_EXTENSION.to_string(),
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE_PATH),
            escape_values: true,
        }
    }
}

impl CoreConfig {
    /// Creates config with the required paths. Other fields use defaults.
    pub fn new(input_dir: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_dir,
            output_path,
            ..Default::default()
        }
    }

    /// Checks the extension, the ffprobe path and the output file name.
    pub fn validate(&self) -> CoreResult<()> {
        if self.extension.is_empty() {
            return Err(CoreError::Config("extension must not be empty".to_string()));
        }

        if self.extension.contains('.') || self.extension.contains('/') {
            return Err(CoreError::Config(format!(
                "extension must be a bare suffix like 'mp3', got '{}'",
                self.extension
            )));
        }

        if self.ffprobe_path.as_os_str().is_empty() {
            return Err(CoreError::Config("ffprobe path must not be empty".to_string()));
        }

        if self.output_path.file_name().is_none() {
            return Err(CoreError::Config(format!(
                "output path must name a file, got '{}'",
                self.output_path.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoreConfig::default();

        assert_eq!(config.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.extension, DEFAULT_EXTENSION);
        assert_eq!(config.ffprobe_path, PathBuf::from(DEFAULT_FFPROBE_PATH));
        assert!(config.escape_values);

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_config() {
        let config = CoreConfig::new(PathBuf::from("/book/parts"), PathBuf::from("/book/meta.txt"));

        assert_eq!(config.input_dir, PathBuf::from("/book/parts"));
        assert_eq!(config.output_path, PathBuf::from("/book/meta.txt"));
        assert_eq!(config.extension, DEFAULT_EXTENSION);
    }

    #[test]
    fn test_invalid_extension() {
        let mut config = CoreConfig::default();

        config.extension = String::new();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        config.extension = ".mp3".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_output_path_without_file_name() {
        let mut config = CoreConfig::default();
        config.output_path = PathBuf::from("/");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        config.output_path = PathBuf::from("build/..");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_empty_ffprobe_path() {
        let mut config = CoreConfig::default();
        config.ffprobe_path = PathBuf::new();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }
}
