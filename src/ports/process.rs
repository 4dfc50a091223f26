//! Process launcher port for running external scripts.

/// How a launched process finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStatus {
    /// The process exited normally with this code.
    Exited(i32),
    /// The process ended without an exit code (killed by a signal).
    Signaled,
}

impl LaunchStatus {
    /// Whether the process exited with code 0.
    #[must_use]
    pub fn success(self) -> bool {
        self == Self::Exited(0)
    }
}

/// Launches a program with an argument vector and waits for it to exit.
///
/// Standard streams are passed through to the caller's console; the
/// launcher never captures them. Abstracting the launch lets the runner
/// be driven by fake processes in tests.
pub trait ProcessLauncher: Send + Sync {
    /// Runs `program` with `args`, blocking until it terminates.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    fn launch(
        &self,
        program: &str,
        args: &[&str],
    ) -> Result<LaunchStatus, Box<dyn std::error::Error + Send + Sync>>;
}
