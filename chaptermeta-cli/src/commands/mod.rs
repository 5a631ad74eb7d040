//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `generate` command.
/// This command builds the FFMETADATA1 document for a directory of chapters.
pub mod generate;

/// Module containing the implementation of the `probe` command.
pub mod probe;
