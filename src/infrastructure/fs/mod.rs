//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{user_config_path, MODINSTALL_TEST_HOME_VAR};
pub use local::{expand_home, LocalFs};
