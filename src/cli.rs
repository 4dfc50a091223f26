//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `run-all`.
#[derive(Debug, Parser)]
#[command(name = "run-all", version, about = "Run analysis scripts in order, stopping at the first failure")]
pub struct Cli {
    /// Pipeline file (YAML, or JSON with a `.json` extension). Defaults to the
    /// built-in analysis pipeline.
    #[arg(long, short = 'p', global = true, value_name = "FILE")]
    pub pipeline: Option<PathBuf>,

    /// Interpreter to launch each script with, overriding the pipeline's.
    #[arg(long, global = true, value_name = "NAME")]
    pub interpreter: Option<String>,

    /// Print launch diagnostics to stderr.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// The command to execute. Defaults to `run`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported top-level subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run every task in order, stopping at the first failure.
    Run,
    /// Print the pipeline's tasks without running them.
    List,
}

impl Cli {
    /// The selected command, `run` when none was given.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}
