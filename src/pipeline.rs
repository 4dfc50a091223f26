//! Pipeline definition: an interpreter plus an ordered list of tasks.
//!
//! Pipelines are either built in ([`Pipeline::default_analysis`]) or loaded
//! from a YAML or JSON file:
//!
//! ```yaml
//! interpreter: python3
//! tasks:
//!   - scripts/analyze_openings.py
//!   - scripts/visualize.py
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Interpreter used when a pipeline file does not name one.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Errors raised while building or loading a pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// A task identifier was empty or whitespace.
    #[error("task at position {position} has an empty path")]
    EmptyTask {
        /// 1-indexed position in the task list.
        position: usize,
    },
    /// The interpreter name was empty or whitespace.
    #[error("interpreter must not be empty")]
    EmptyInterpreter,
    /// The pipeline file could not be read.
    #[error("failed to read pipeline file {path}: {source}")]
    Read {
        /// File that was being read.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The pipeline file could not be parsed.
    #[error("failed to parse pipeline file {path}: {message}")]
    Parse {
        /// File that was being parsed.
        path: String,
        /// Parser error message.
        message: String,
    },
}

/// One external script, identified by its path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    /// The script path as given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An interpreter and the ordered scripts it runs.
///
/// List order is execution order. A `Pipeline` is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pipeline {
    #[serde(default = "default_interpreter")]
    interpreter: String,
    tasks: Vec<Task>,
}

fn default_interpreter() -> String {
    DEFAULT_INTERPRETER.to_string()
}

impl Pipeline {
    /// Builds a pipeline from an interpreter and task paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the interpreter or any task path is blank.
    pub fn new<I, S>(interpreter: impl Into<String>, tasks: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pipeline = Self {
            interpreter: interpreter.into(),
            tasks: tasks.into_iter().map(|t| Task(t.into())).collect(),
        };
        pipeline.validate()?;
        Ok(pipeline)
    }

    /// The analysis pipeline run when no file is given.
    #[must_use]
    pub fn default_analysis() -> Self {
        Self {
            interpreter: default_interpreter(),
            tasks: [
                "scripts/analyze_openings.py",
                "scripts/analyze_outcomes.py",
                "scripts/analyze_time_management.py",
                "scripts/visualize.py",
            ]
            .into_iter()
            .map(|t| Task(t.to_string()))
            .collect(),
        }
    }

    /// Loads a pipeline file. `.json` files are parsed as JSON, everything
    /// else as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|source| PipelineError::Read { path: display.clone(), source })?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let pipeline: Self = if is_json {
            serde_json::from_str(&content)
                .map_err(|e| PipelineError::Parse { path: display, message: e.to_string() })?
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| PipelineError::Parse { path: display, message: e.to_string() })?
        };
        pipeline.validate()?;
        Ok(pipeline)
    }

    /// Returns a copy that runs every task with `interpreter`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::EmptyInterpreter`] if `interpreter` is blank.
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Result<Self, PipelineError> {
        self.interpreter = interpreter.into();
        self.validate()?;
        Ok(self)
    }

    /// Interpreter every task is launched with.
    #[must_use]
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Tasks in execution order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn validate(&self) -> Result<(), PipelineError> {
        if self.interpreter.trim().is_empty() {
            return Err(PipelineError::EmptyInterpreter);
        }
        if let Some(index) = self.tasks.iter().position(|t| t.0.trim().is_empty()) {
            return Err(PipelineError::EmptyTask { position: index + 1 });
        }
        Ok(())
    }
}
