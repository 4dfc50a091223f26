//! Service context bundling the port trait objects.

use crate::adapters::live::process::LiveProcessLauncher;
use crate::ports::process::ProcessLauncher;

/// Bundles all port trait objects into a single context.
///
/// Commands receive a context rather than constructing adapters, so tests
/// can wire in fakes.
pub struct ServiceContext {
    /// Launcher used to start each task's process.
    pub launcher: Box<dyn ProcessLauncher>,
}

impl ServiceContext {
    /// Creates a live context that spawns real processes.
    #[must_use]
    pub fn live() -> Self {
        Self { launcher: Box::new(LiveProcessLauncher) }
    }

    /// Creates a context around a custom launcher.
    #[must_use]
    pub fn with_launcher(launcher: Box<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }
}
