// chaptermeta-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use chaptermeta_core::config::{
    DEFAULT_EXTENSION, DEFAULT_FFPROBE_PATH, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_PATH,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "chaptermeta: audiobook chapter metadata generator",
    long_about = "Probes per-chapter audio files with ffprobe and writes an FFMETADATA1 \
                  document with one chapter per file, ready for ffmpeg to merge."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug-level logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Builds the chapter metadata document from a directory of chapter files
    Generate(GenerateArgs),
    /// Probes a single file and prints the data chaptermeta would use
    Probe(ProbeArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory containing the per-chapter audio files
    #[arg(
        short = 'i',
        long = "input",
        value_name = "INPUT_DIR",
        env = "CHAPTERMETA_INPUT_DIR",
        default_value = DEFAULT_INPUT_DIR
    )]
    pub input_dir: PathBuf,

    /// Path of the FFMETADATA1 file to write
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUTPUT_FILE",
        env = "CHAPTERMETA_OUTPUT",
        default_value = DEFAULT_OUTPUT_PATH
    )]
    pub output_path: PathBuf,

    /// Extension of chapter files, without the dot (case-sensitive)
    #[arg(short = 'e', long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// ffprobe executable to use
    #[arg(
        long,
        value_name = "PATH",
        env = "CHAPTERMETA_FFPROBE",
        default_value = DEFAULT_FFPROBE_PATH
    )]
    pub ffprobe: PathBuf,

    /// Write tag and title values verbatim instead of escaping `=`, `;`, `#`, `\` and newlines
    #[arg(long)]
    pub raw_values: bool,

    /// Print the document to stdout instead of writing OUTPUT_FILE
    #[arg(long)]
    pub stdout: bool,

    /// Optional: Directory for a run log file (console logging is used otherwise)
    #[arg(short, long, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ProbeArgs {
    /// Audio file to probe
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// ffprobe executable to use
    #[arg(
        long,
        value_name = "PATH",
        env = "CHAPTERMETA_FFPROBE",
        default_value = DEFAULT_FFPROBE_PATH
    )]
    pub ffprobe: PathBuf,
}

/// Parses the process arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Parses an explicit argument list; the first item is the binary name.
pub fn parse_cli_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_uses_classic_defaults() {
        let cli = parse_cli_from(["chaptermeta", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        // Environment overrides would change these; the test environment sets none.
        if std::env::var_os("CHAPTERMETA_INPUT_DIR").is_none() {
            assert_eq!(args.input_dir, PathBuf::from("./original"));
        }
        if std::env::var_os("CHAPTERMETA_OUTPUT").is_none() {
            assert_eq!(args.output_path, PathBuf::from("./build/book.ffmeta"));
        }
        assert_eq!(args.extension, "mp3");
        assert!(!args.raw_values);
        assert!(!args.stdout);
        assert!(!cli.verbose);
    }

    #[test]
    fn generate_accepts_overrides() {
        let cli = parse_cli_from([
            "chaptermeta",
            "generate",
            "-i",
            "parts",
            "-o",
            "out/meta.txt",
            "--extension",
            "m4a",
            "--raw-values",
            "--verbose",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.input_dir, PathBuf::from("parts"));
        assert_eq!(args.output_path, PathBuf::from("out/meta.txt"));
        assert_eq!(args.extension, "m4a");
        assert!(args.raw_values);
        assert!(cli.verbose);
    }

    #[test]
    fn probe_requires_a_file() {
        assert!(parse_cli_from(["chaptermeta", "probe"]).is_err());
        let cli = parse_cli_from(["chaptermeta", "probe", "01.mp3"]).unwrap();
        assert!(matches!(cli.command, Commands::Probe(ref a) if a.file == PathBuf::from("01.mp3")));
    }
}
