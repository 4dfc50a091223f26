//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the runner and the operating
//! system. Implementations live in `src/adapters/`.

pub mod process;

pub use process::{LaunchStatus, ProcessLauncher};
