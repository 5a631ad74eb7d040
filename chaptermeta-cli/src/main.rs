//! Main entry point for the chaptermeta CLI application.
//!
//! This handles command-line argument parsing, logging setup, and dispatching
//! to the command handlers. Any error is printed to stderr and the process
//! exits with status 1.

use chaptermeta::error::{CliResult, hint_for};
use chaptermeta::logging::{init_console_logging, init_file_logging, level_for};
use chaptermeta::terminal::{TerminalReporter, print_error};
use chaptermeta::{Cli, Commands, parse_cli, run_generate, run_probe};

use std::process;

fn main() {
    let cli_args = parse_cli();
    let logs_to_file = writes_file_log(&cli_args);

    if let Err(e) = run(cli_args) {
        // The console already gets the error from print_error below.
        if logs_to_file {
            log::error!("{}", e);
        } else {
            log::debug!("{}", e);
        }
        print_error(&e.to_string(), hint_for(&e));
        process::exit(1);
    }
}

fn writes_file_log(cli_args: &Cli) -> bool {
    matches!(&cli_args.command, Commands::Generate(args) if args.log_dir.is_some())
}

fn run(cli_args: Cli) -> CliResult<()> {
    let log_level = level_for(cli_args.verbose);

    match cli_args.command {
        Commands::Generate(args) => {
            match &args.log_dir {
                Some(log_dir) => {
                    let log_path = init_file_logging(log_dir, log_level)?;
                    log::info!("chaptermeta starting, logging to {}", log_path.display());
                }
                None => init_console_logging(log_level),
            }

            let reporter = TerminalReporter::new();
            run_generate(args, &reporter)
        }
        Commands::Probe(args) => {
            init_console_logging(log_level);
            run_probe(args)
        }
    }
}
