//! Command dispatch and handlers.

pub mod list;
pub mod run;

use std::io::{self, Write};

use crate::cli::{Cli, Command};
use crate::context::ServiceContext;
use crate::pipeline::Pipeline;

/// Dispatch parsed arguments to their handler using live adapters.
///
/// # Errors
///
/// Returns an error string if the pipeline cannot be loaded or the selected
/// command fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch_with_context(cli, &ctx, &mut out)
}

/// Dispatch a command with the given service context and output sink.
///
/// # Errors
///
/// Returns an error string if the pipeline cannot be loaded or the selected
/// command fails.
pub fn dispatch_with_context(
    cli: &Cli,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<(), String> {
    let pipeline = resolve_pipeline(cli)?;
    match cli.command() {
        Command::Run => run::run_with_context(ctx, &pipeline, out),
        Command::List => list::run(&pipeline, out),
    }
}

/// Loads the pipeline named by `--pipeline`, or the built-in one, and
/// applies any `--interpreter` override.
fn resolve_pipeline(cli: &Cli) -> Result<Pipeline, String> {
    let pipeline = match &cli.pipeline {
        Some(path) => Pipeline::from_path(path).map_err(|e| e.to_string())?,
        None => Pipeline::default_analysis(),
    };
    match &cli.interpreter {
        Some(interpreter) => pipeline.with_interpreter(interpreter.as_str()).map_err(|e| e.to_string()),
        None => Ok(pipeline),
    }
}
