//! Live process launcher using `std::process::Command`.

use std::process::Command;

use crate::ports::process::{LaunchStatus, ProcessLauncher};

/// Live launcher that spawns the program directly, without a shell.
///
/// Stdio is inherited, so script output appears on the caller's console.
pub struct LiveProcessLauncher;

impl ProcessLauncher for LiveProcessLauncher {
    fn launch(
        &self,
        program: &str,
        args: &[&str],
    ) -> Result<LaunchStatus, Box<dyn std::error::Error + Send + Sync>> {
        let status = Command::new(program).args(args).status()?;
        Ok(status.code().map_or(LaunchStatus::Signaled, LaunchStatus::Exited))
    }
}
