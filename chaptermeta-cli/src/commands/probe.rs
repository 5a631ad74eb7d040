//! The `probe` command: show what chaptermeta reads from one file.

use chaptermeta_core::{CoreError, FfprobeProber, MediaProber, ProbeResult, duration_to_ms};

use crate::cli::ProbeArgs;
use crate::error::{CliErrorContext, CliResult};
use crate::terminal::print_field;

/// Probes `args.file` and prints duration, derived chapter title and tags.
pub fn run_probe(args: ProbeArgs) -> CliResult<()> {
    let prober = FfprobeProber::new(&args.ffprobe);
    let result = match prober.probe(&args.file) {
        // Left unwrapped so main can still attach the install hint.
        Err(e @ CoreError::CommandStart(..)) => return Err(e),
        other => other.cli_context(format!("Failed to probe {}", args.file.display()))?,
    };

    print_probe_result(&args.file.display().to_string(), &result);
    Ok(())
}

fn print_probe_result(file: &str, result: &ProbeResult) {
    print_field("File", file);
    print_field(
        "Duration",
        format!(
            "{:.3} s ({} ms)",
            result.duration_seconds,
            duration_to_ms(result.duration_seconds)
        ),
    );
    print_field("Title", &result.title_hint);

    if result.tags.is_empty() {
        print_field("Tags", "(none)");
    } else {
        print_field("Tags", result.tags.len());
        for (key, value) in &result.tags {
            println!("  {key}={value}");
        }
    }
}
