//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_runner;
pub mod file_system;

pub use build_runner::{BuildCommand, BuildRunner};
pub use file_system::FileSystem;
