use std::process::ExitCode;

use tss_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Log to file; fall back to stderr so a read-only state dir never blocks sanitizing.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match CliCommand::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("tss error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
