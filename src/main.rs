//! Forgeboard CLI.
//!
//! This is the main entry point for the `forgeboard` binary. It reads provider
//! payloads and patch files, hands them to the library, and prints the
//! results. Errors map to exit codes.

mod cli;
mod commands;

use cli::Cli;
use forgeboard::exit_codes;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Warnings by default; `--verbose` or `RUST_LOG` opens it up.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
