//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod hash;
mod setting;

pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
pub use setting::{ConfigSource, Setting};
