//! The `generate` command: discover, probe, render and write.

use chaptermeta_core::reporting::Reporter;
use chaptermeta_core::{CoreConfig, FfprobeProber, build_metadata, generate_metadata_file};
use std::io::Write;

use crate::cli::GenerateArgs;
use crate::error::CliResult;
use crate::terminal::print_success;

/// Builds the core configuration from the command-line arguments.
pub fn config_from_args(args: &GenerateArgs) -> CoreConfig {
    CoreConfig {
        input_dir: args.input_dir.clone(),
        output_path: args.output_path.clone(),
        extension: args.extension.clone(),
        ffprobe_path: args.ffprobe.clone(),
        escape_values: !args.raw_values,
    }
}

/// Runs the pipeline. With `--stdout` the document goes to stdout and no
/// file is touched; otherwise it is written to the output path and a
/// confirmation line is printed.
pub fn run_generate(args: GenerateArgs, reporter: &dyn Reporter) -> CliResult<()> {
    let config = config_from_args(&args);

    log::info!("Input directory: {}", config.input_dir.display());
    log::debug!(
        "Extension: .{}, ffprobe: {}, escaping: {}",
        config.extension,
        config.ffprobe_path.display(),
        config.escape_values
    );

    let prober = FfprobeProber::new(&config.ffprobe_path);

    if args.stdout {
        let run = build_metadata(&config, &prober, reporter)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(run.document.as_str().as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    let run = generate_metadata_file(&config, &prober, reporter)?;
    log::debug!(
        "{} chapters, {} ms total",
        run.timeline.chapters().len(),
        run.timeline.total_ms()
    );
    print_success(&format!("metadata written to {}", config.output_path.display()));

    Ok(())
}
