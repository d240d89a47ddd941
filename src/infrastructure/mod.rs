//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and home/config directory lookup
//! - `process/` - Build command runner

pub mod fs;
pub mod process;

pub use fs::LocalFs;
pub use process::ProcessBuildRunner;
