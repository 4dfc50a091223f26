//! Diagnostic logging to stderr.
//!
//! Progress lines are not logged; they go to stdout through the reporter.
//! Only warnings are shown by default. `--verbose` adds the run start
//! (INFO) and each launched command line and failure cause (DEBUG).

use tracing_subscriber::EnvFilter;

/// Filter directive used for the given verbosity flag.
#[must_use]
pub fn level_for(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the stderr subscriber. Returns `false` if a global subscriber
/// was already installed, in which case the existing one stays active.
pub fn init(verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level_for(verbose)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}
