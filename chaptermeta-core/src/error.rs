// ============================================================================
// chaptermeta-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Custom Error Types for chaptermeta-core
//
// This module defines the error types used throughout the chaptermeta-core
// library. Every error is fatal for a run: the first failure stops the whole
// pipeline and nothing is written.
//
// KEY COMPONENTS:
// - CoreError: Enum of all possible error types
// - CoreResult: Type alias for Result with CoreError
// - Helper functions for building command errors
//
// AI-ASSISTANT-INFO: Error handling for chaptermeta-core

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors produced by the chaptermeta-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    // ---- Discovery ----
    /// No input file carries the configured extension.
    #[error("No .{extension} files found in {}", dir.display())]
    NoFilesFound { dir: PathBuf, extension: String },

    /// The input directory is missing, unreadable or not a directory.
    #[error("Path error: {0}")]
    PathError(String),

    // ---- Probing ----
    /// The probe command could not be spawned at all.
    #[error("Failed to start command '{0}': {1}")]
    CommandStart(String, #[source] io::Error),

    /// The probe command ran but exited with a failure status.
    #[error("Command '{0}' failed with status {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    /// The probe report was not valid JSON or lacked a required field.
    #[error("Failed to parse ffprobe output for {}: {message}", path.display())]
    ProbeParse { path: PathBuf, message: String },

    // ---- Output ----
    /// Writing the metadata document failed.
    #[error("Failed to write metadata to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---- Configuration ----
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failure reported by a higher-level operation, carrying its context.
    #[error("{0}")]
    OperationFailed(String),
}

/// Result type used throughout chaptermeta-core.
pub type CoreResult<T> = Result<T, CoreError>;

/// Builds a [`CoreError::CommandStart`] for a command that could not be spawned.
pub fn command_start_error(command: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(command.into(), err)
}

/// Builds a [`CoreError::CommandFailed`] from an exit status and captured stderr.
pub fn command_failed_error(
    command: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(command.into(), status, stderr.into())
}

impl CoreError {
    /// Returns true for the errors raised while probing a single input file.
    #[must_use]
    pub fn is_probe_error(&self) -> bool {
        matches!(
            self,
            CoreError::CommandStart(..) | CoreError::CommandFailed(..) | CoreError::ProbeParse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_files_found_names_directory_and_extension() {
        let err = CoreError::NoFilesFound {
            dir: PathBuf::from("original"),
            extension: "mp3".to_string(),
        };
        assert_eq!(err.to_string(), "No .mp3 files found in original");
    }

    #[test]
    fn probe_errors_are_classified() {
        let start = command_start_error(
            "ffprobe",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(start.is_probe_error());

        let parse = CoreError::ProbeParse {
            path: PathBuf::from("01.mp3"),
            message: "missing format.duration".to_string(),
        };
        assert!(parse.is_probe_error());

        assert!(!CoreError::Config("bad".to_string()).is_probe_error());
    }
}
