//! DeploymentDirective entity - one artifact, one optional destination
//!
//! Built once per invocation from the resolved `Config` and consumed by the
//! installer. The artifact is described rather than resolved so that a run with
//! no destination can skip without ever needing to know the artifact.

use std::path::{Path, PathBuf};

use crate::error::{InstallError, InstallResult};

/// How the artifact to install is named
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSpec {
    /// Explicit path to the file
    Path(PathBuf),
    /// Release jar produced by the build: `<build_dir>/libs/<name>-<version>.jar`
    Release {
        build_dir: PathBuf,
        name: String,
        version: String,
    },
    /// Not enough configuration to name the artifact
    Unresolved,
}

impl ArtifactSpec {
    /// Release jar spec, or `Unresolved` when name or version is missing
    pub fn release(build_dir: PathBuf, name: Option<&str>, version: Option<&str>) -> Self {
        match (name.map(str::trim), version.map(str::trim)) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                ArtifactSpec::Release {
                    build_dir,
                    name: name.to_string(),
                    version: version.to_string(),
                }
            }
            _ => ArtifactSpec::Unresolved,
        }
    }

    /// Concrete path of the artifact
    pub fn resolve(&self) -> InstallResult<PathBuf> {
        match self {
            ArtifactSpec::Path(path) => Ok(path.clone()),
            ArtifactSpec::Release {
                build_dir,
                name,
                version,
            } => Ok(build_dir
                .join("libs")
                .join(format!("{}-{}.jar", name, version))),
            ArtifactSpec::Unresolved => Err(InstallError::ArtifactUnresolved),
        }
    }
}

/// What to install and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentDirective {
    pub artifact: ArtifactSpec,
    /// `None` when no mods directory is configured (or it was configured empty)
    pub destination: Option<PathBuf>,
}

impl DeploymentDirective {
    pub fn new(artifact: ArtifactSpec, destination: Option<PathBuf>) -> Self {
        let destination = destination.filter(|d| !d.as_os_str().is_empty());
        Self {
            artifact,
            destination,
        }
    }

    /// File the artifact lands in: `destination / base_name(artifact)`
    pub fn destination_file(destination: &Path, artifact: &Path) -> InstallResult<PathBuf> {
        let name = artifact
            .file_name()
            .ok_or_else(|| InstallError::ArtifactNotFound {
                path: artifact.to_path_buf(),
            })?;
        Ok(destination.join(name))
    }
}
