//! Process Execution
//!
//! Runs external build commands for the post-build hook.

mod build;

pub use build::ProcessBuildRunner;
