// ============================================================================
// chaptermeta-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reuses the core error type so every failure reaches `main` as a
// CoreError, and adds operator-facing context plus hints for common mistakes.
//
// KEY COMPONENTS:
// - CliResult: Type alias for CLI operations
// - CliErrorContext: context extension for Result
// - hint_for: suggestion text for well-known failures
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use chaptermeta_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;
use std::io;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", context, core_error))
        })
    }
}

// ============================================================================
// HINTS
// ============================================================================

/// Returns a suggestion for errors the operator can usually fix directly.
pub fn hint_for(error: &CoreError) -> Option<&'static str> {
    match error {
        CoreError::CommandStart(_, e) if e.kind() == io::ErrorKind::NotFound => {
            Some("install ffprobe or point --ffprobe / CHAPTERMETA_FFPROBE at it")
        }
        CoreError::NoFilesFound { .. } => {
            Some("check --input and --extension (the extension match is case-sensitive)")
        }
        _ => None,
    }
}
