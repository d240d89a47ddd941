//! Configuration module for modinstall
//!
//! Resolves one `Config` per invocation from layered sources, highest priority first:
//! 1. CLI flags (`--mods-dir`, `--artifact`, `--build-dir`)
//! 2. Environment variables (`MODINSTALL_*`)
//! 3. Project properties (`gradle.properties`)
//! 4. Local properties (`gradle-local.properties`)
//! 5. User config (`~/.config/modinstall/config.toml`)
//! 6. Built-in defaults
//!
//! A layer that sets a key wins even when the value is empty, so an empty
//! `modsDir` disables installation.

mod loader;
mod properties;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    ConfigLoader, ConfigOverrides, ENV_ARTIFACT, ENV_BUILD_DIR, ENV_MODS_DIR,
    LOCAL_PROPERTIES_FILE, PROJECT_PROPERTIES_FILE,
};
pub use properties::Properties;
pub use types::{ColorMode, Config, OutputConfig, UserConfig};
