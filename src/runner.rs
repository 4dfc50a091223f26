//! Sequential fail-fast runner.
//!
//! Each task is launched as `<interpreter> <task>` and awaited before the
//! next one starts. The first task that does not exit with code 0 stops the
//! run; later tasks are never launched.

use std::fmt;

use tracing::{debug, info};

use crate::pipeline::{Pipeline, Task};
use crate::ports::process::{LaunchStatus, ProcessLauncher};
use crate::report::ProgressReporter;

/// Why a task counted as failed. All reasons are treated identically by the
/// runner; the distinction only feeds diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The process exited with a non-zero code.
    ExitCode(i32),
    /// The process was killed by a signal.
    Signaled,
    /// The process could not be started.
    Spawn(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExitCode(code) => write!(f, "exit code {code}"),
            Self::Signaled => f.write_str("terminated by signal"),
            Self::Spawn(message) => write!(f, "could not be started: {message}"),
        }
    }
}

/// Errors that end a run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// A task failed; no later task was launched.
    #[error("task {position} ({task}) failed: {reason}")]
    TaskFailed {
        /// The failed task.
        task: Task,
        /// 1-indexed position of the task in the pipeline.
        position: usize,
        /// Diagnostic cause.
        reason: FailureReason,
    },
    /// A progress line could not be written.
    #[error("failed to write progress: {0}")]
    Report(#[from] std::io::Error),
}

/// Outcome of a fully successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Tasks that ran, in execution order.
    pub completed: Vec<Task>,
}

/// Runs a pipeline's tasks one at a time through a [`ProcessLauncher`].
pub struct Runner<'a> {
    launcher: &'a dyn ProcessLauncher,
}

impl<'a> Runner<'a> {
    /// Creates a runner backed by `launcher`.
    #[must_use]
    pub fn new(launcher: &'a dyn ProcessLauncher) -> Self {
        Self { launcher }
    }

    /// Runs every task in order, stopping at the first failure.
    ///
    /// An empty pipeline launches nothing and succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::TaskFailed`] for the first task that does not exit
    /// with code 0, or [`RunError::Report`] if progress cannot be written.
    pub fn run(
        &self,
        pipeline: &Pipeline,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<RunSummary, RunError> {
        let interpreter = pipeline.interpreter();
        let mut completed = Vec::with_capacity(pipeline.tasks().len());
        info!("running {} task(s) with {interpreter}", pipeline.tasks().len());

        for (index, task) in pipeline.tasks().iter().enumerate() {
            reporter.task_started(task)?;
            debug!("launching {interpreter} {task}");

            let reason = match self.launcher.launch(interpreter, &[task.as_str()]) {
                Ok(status) if status.success() => None,
                Ok(LaunchStatus::Exited(code)) => Some(FailureReason::ExitCode(code)),
                Ok(LaunchStatus::Signaled) => Some(FailureReason::Signaled),
                Err(err) => Some(FailureReason::Spawn(err.to_string())),
            };

            if let Some(reason) = reason {
                debug!("{task} failed: {reason}");
                reporter.task_failed(task)?;
                return Err(RunError::TaskFailed { task: task.clone(), position: index + 1, reason });
            }

            reporter.task_succeeded(task)?;
            completed.push(task.clone());
        }

        reporter.all_succeeded()?;
        Ok(RunSummary { completed })
    }
}
