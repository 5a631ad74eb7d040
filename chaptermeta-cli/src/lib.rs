//! Library component for the chaptermeta CLI application.
//!
//! This contains the argument definitions and command logic that the binary
//! crate uses.

/// Command-line interface definitions using clap
pub mod cli;

/// Command implementations for each subcommand
pub mod commands;

/// Error handling utilities for the CLI
pub mod error;

/// Logger setup and helper functions
pub mod logging;

/// Progress bar and status line output
pub mod terminal;

// Re-exports for convenience
pub use cli::{Cli, Commands, GenerateArgs, ProbeArgs, parse_cli, parse_cli_from};
pub use commands::generate::run_generate;
pub use commands::probe::run_probe;
