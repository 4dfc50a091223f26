//! `run-all list` command.

use std::io::Write;

use crate::pipeline::Pipeline;

/// Print the interpreter and numbered tasks without running anything.
///
/// # Errors
///
/// Returns an error string if output cannot be written.
pub fn run(pipeline: &Pipeline, out: &mut dyn Write) -> Result<(), String> {
    write_listing(pipeline, out).map_err(|e| format!("Failed to write task list: {e}"))
}

fn write_listing(pipeline: &Pipeline, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Interpreter: {}", pipeline.interpreter())?;
    if pipeline.tasks().is_empty() {
        writeln!(out, "No tasks.")?;
        return Ok(());
    }
    for (index, task) in pipeline.tasks().iter().enumerate() {
        writeln!(out, "{:>3}. {task}", index + 1)?;
    }
    Ok(())
}
