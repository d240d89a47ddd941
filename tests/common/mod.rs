//! Common test utilities for modinstall CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project, home and mods directories plus CLI helpers
//! - Assertion macros: `assert_installed!`, `assert_output_contains!`, etc.
//! - Fixtures: Reusable properties and jar content

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
