//! Console progress output for a run.

use std::io::{self, Write};

use crate::pipeline::Task;

/// Receives progress notices from the runner.
pub trait ProgressReporter {
    /// A task is about to be launched.
    ///
    /// # Errors
    ///
    /// Returns an error if the notice cannot be written.
    fn task_started(&mut self, task: &Task) -> io::Result<()>;

    /// A task exited with code 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the notice cannot be written.
    fn task_succeeded(&mut self, task: &Task) -> io::Result<()>;

    /// A task failed; the run stops after this notice.
    ///
    /// # Errors
    ///
    /// Returns an error if the notice cannot be written.
    fn task_failed(&mut self, task: &Task) -> io::Result<()>;

    /// Every task succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the notice cannot be written.
    fn all_succeeded(&mut self) -> io::Result<()>;
}

/// Writes progress lines to any [`Write`] sink, flushing after each line so
/// they interleave correctly with child process output.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Wraps `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for ConsoleReporter<W> {
    fn task_started(&mut self, task: &Task) -> io::Result<()> {
        writeln!(self.out, "Running {task}...")?;
        self.out.flush()
    }

    fn task_succeeded(&mut self, task: &Task) -> io::Result<()> {
        writeln!(self.out, "{task} ran successfully.\n")?;
        self.out.flush()
    }

    fn task_failed(&mut self, task: &Task) -> io::Result<()> {
        writeln!(self.out, "Error occurred while running {task}. Stopping execution.")?;
        self.out.flush()
    }

    fn all_succeeded(&mut self) -> io::Result<()> {
        writeln!(self.out, "All tasks completed successfully!")?;
        self.out.flush()
    }
}
