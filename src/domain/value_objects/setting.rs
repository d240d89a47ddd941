//! Resolved configuration values with provenance.

use std::fmt;
use std::path::PathBuf;

/// Where a configuration value came from, lowest priority first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigSource {
    Default,
    UserConfig(PathBuf),
    LocalProperties(PathBuf),
    ProjectProperties(PathBuf),
    Env(&'static str),
    Cli(&'static str),
}

impl ConfigSource {
    /// Short machine-readable label, used in JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigSource::Default => "default",
            ConfigSource::UserConfig(_) => "user_config",
            ConfigSource::LocalProperties(_) => "local_properties",
            ConfigSource::ProjectProperties(_) => "project_properties",
            ConfigSource::Env(_) => "env",
            ConfigSource::Cli(_) => "cli",
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::UserConfig(p)
            | ConfigSource::LocalProperties(p)
            | ConfigSource::ProjectProperties(p) => write!(f, "{}", p.display()),
            ConfigSource::Env(var) => write!(f, "${}", var),
            ConfigSource::Cli(flag) => write!(f, "{}", flag),
        }
    }
}

/// A configuration value and the layer that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> Setting<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Setting<U> {
        Setting {
            value: f(self.value),
            source: self.source,
        }
    }
}
