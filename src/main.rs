//! mlkit CLI entry point.
//!
//! Parses arguments, initializes logging, dispatches to the command handler,
//! and maps errors to exit codes.

use mlkit::cli::Cli;
use mlkit::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(err) = logging::init() {
        eprintln!("Error: {}", err);
        return ExitCode::from(err.exit_code() as u8);
    }

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
