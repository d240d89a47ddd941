//! Home and config directory resolution with test isolation support.
//!
//! On Windows, `dirs::home_dir()` uses the Windows system API rather than
//! environment variables, so setting `HOME` in tests has no effect there.
//! The user config lookup checks `MODINSTALL_TEST_HOME` first and falls back
//! to `dirs::home_dir()`.
//!
//! Tilde expansion in user-provided paths (`modsDir=~/mods`) uses the real home
//! directory via `expand_home`, without the test override.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const MODINSTALL_TEST_HOME_VAR: &str = "MODINSTALL_TEST_HOME";

/// Path of the user config file.
///
/// `$XDG_CONFIG_HOME/modinstall/config.toml`, else
/// `<home>/.config/modinstall/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    user_config_path_with(|key| std::env::var(key).ok())
}

fn user_config_path_with(get_env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    let base = get_env("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            get_env(MODINSTALL_TEST_HOME_VAR)
                .map(PathBuf::from)
                .or_else(dirs::home_dir)
                .map(|h| h.join(".config"))
        })?;
    Some(base.join("modinstall").join("config.toml"))
}
