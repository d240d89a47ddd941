//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ArtifactSpec, DeploymentDirective};
use crate::domain::value_objects::{ConfigSource, Setting};

/// User config file (`~/.config/modinstall/config.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UserConfig {
    /// Default mods directory for every project
    #[serde(default)]
    pub mods_dir: Option<String>,

    /// Build output directory, relative to the project
    #[serde(default)]
    pub build_dir: Option<String>,

    /// Artifact path, relative to the project
    #[serde(default)]
    pub artifact: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub project_dir: PathBuf,
    /// Destination directory. An empty path means "configured empty".
    pub mods_dir: Option<Setting<PathBuf>>,
    /// Explicit artifact path, bypassing name/version derivation
    pub artifact: Option<Setting<PathBuf>>,
    pub build_dir: Setting<PathBuf>,
    pub project_name: Option<Setting<String>>,
    pub project_version: Option<Setting<String>>,
    pub output: OutputConfig,
    /// Config files that were found and read, in load order
    pub loaded_files: Vec<PathBuf>,
}

impl Config {
    /// Defaults for a project directory, before any layer is applied
    pub fn defaults(project_dir: &Path) -> Self {
        Self {
            project_dir: project_dir.to_path_buf(),
            mods_dir: None,
            artifact: None,
            build_dir: Setting::new(project_dir.join("build"), ConfigSource::Default),
            project_name: None,
            project_version: None,
            output: OutputConfig::default(),
            loaded_files: Vec::new(),
        }
    }

    pub fn artifact_spec(&self) -> ArtifactSpec {
        match &self.artifact {
            Some(explicit) if !explicit.value.as_os_str().is_empty() => {
                ArtifactSpec::Path(explicit.value.clone())
            }
            _ => ArtifactSpec::release(
                self.build_dir.value.clone(),
                self.project_name.as_ref().map(|s| s.value.as_str()),
                self.project_version.as_ref().map(|s| s.value.as_str()),
            ),
        }
    }

    pub fn directive(&self) -> DeploymentDirective {
        DeploymentDirective::new(
            self.artifact_spec(),
            self.mods_dir.as_ref().map(|s| s.value.clone()),
        )
    }
}
