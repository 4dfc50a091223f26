//! `run-all run` command.

use std::io::Write;

use crate::context::ServiceContext;
use crate::pipeline::Pipeline;
use crate::report::ConsoleReporter;
use crate::runner::Runner;

/// Run the pipeline, writing progress lines to `out`.
///
/// # Errors
///
/// Returns an error string naming the failed task, or describing why
/// progress could not be written.
pub fn run_with_context(
    ctx: &ServiceContext,
    pipeline: &Pipeline,
    out: &mut dyn Write,
) -> Result<(), String> {
    let mut reporter = ConsoleReporter::new(out);
    Runner::new(ctx.launcher.as_ref())
        .run(pipeline, &mut reporter)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
