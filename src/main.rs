//! Binary entrypoint for the `run-all` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match run_all::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
