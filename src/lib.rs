//! Core library entry for the `run-all` CLI.
//!
//! Runs an ordered list of external scripts through one interpreter, one at a
//! time, stopping at the first script that does not exit with code 0.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod logger;
pub mod pipeline;
pub mod ports;
pub mod report;
pub mod runner;

use clap::Parser;

pub use pipeline::{Pipeline, PipelineError, Task};
pub use runner::{FailureReason, RunError, RunSummary, Runner};

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, the pipeline cannot
/// be loaded, or a task fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version are reported through the error path but are not failures.
        Err(err) if !err.use_stderr() => {
            return err.print().map_err(|e| format!("Failed to write help: {e}"));
        }
        Err(err) => return Err(err.to_string().trim_end().to_string()),
    };
    logger::init(cli.verbose);
    commands::dispatch(&cli)
}
