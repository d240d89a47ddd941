//! Check Use Case
//!
//! Read-only report of what an install would do and whether the copy in the
//! mods directory matches the artifact.

use std::path::PathBuf;

use crate::domain::entities::{DeploymentDirective, SkipReason};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ContentHash;
use crate::error::{InstallError, InstallResult};

/// State of the artifact's copy in the mods directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstalledState {
    /// No destination, or no artifact to compare against
    Unknown,
    NotInstalled,
    Current,
    Stale { installed: ContentHash },
}

impl InstalledState {
    pub fn label(&self) -> &'static str {
        match self {
            InstalledState::Unknown => "unknown",
            InstalledState::NotInstalled => "not_installed",
            InstalledState::Current => "current",
            InstalledState::Stale { .. } => "stale",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub destination: Option<PathBuf>,
    /// Something exists at the destination path
    pub destination_exists: bool,
    pub destination_is_dir: bool,
    /// `None` when the artifact can't be named
    pub artifact: Option<PathBuf>,
    /// `None` when the artifact file doesn't exist
    pub artifact_hash: Option<ContentHash>,
    pub destination_file: Option<PathBuf>,
    pub installed: InstalledState,
}

impl CheckReport {
    /// The skip an install would report, if any
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match &self.destination {
            None => Some(SkipReason::ConfigurationAbsent),
            Some(dir) if !self.destination_exists => {
                Some(SkipReason::DestinationMissing(dir.clone()))
            }
            _ => None,
        }
    }

    /// The destination exists but is not a directory; an install would fail
    pub fn destination_not_directory(&self) -> bool {
        self.destination.is_some() && self.destination_exists && !self.destination_is_dir
    }

    /// An install would succeed or skip cleanly
    pub fn is_ready(&self) -> bool {
        if self.skip_reason().is_some() {
            return true;
        }
        !self.destination_not_directory() && self.artifact_hash.is_some()
    }
}

pub struct CheckUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> CheckUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(&self, directive: &DeploymentDirective) -> InstallResult<CheckReport> {
        let fs = &self.file_system;

        let destination = directive.destination.clone();
        let destination_exists = destination.as_deref().is_some_and(|d| fs.exists(d));
        let destination_is_dir = destination_exists
            && destination.as_deref().is_some_and(|d| fs.is_dir(d));

        let artifact = match directive.artifact.resolve() {
            Ok(path) => Some(path),
            Err(InstallError::ArtifactUnresolved) => None,
            Err(e) => return Err(e),
        };

        let artifact_hash = match &artifact {
            Some(path) if fs.is_file(path) => Some(fs.hash(path)?),
            _ => None,
        };

        let destination_file = match (&destination, &artifact) {
            (Some(dir), Some(artifact)) => {
                Some(DeploymentDirective::destination_file(dir, artifact)?)
            }
            _ => None,
        };

        let installed = match (&destination_file, &artifact_hash) {
            (Some(file), Some(expected)) if destination_is_dir => {
                if !fs.is_file(file) {
                    InstalledState::NotInstalled
                } else {
                    let actual = fs.hash(file)?;
                    if &actual == expected {
                        InstalledState::Current
                    } else {
                        InstalledState::Stale { installed: actual }
                    }
                }
            }
            _ => InstalledState::Unknown,
        };

        Ok(CheckReport {
            destination,
            destination_exists,
            destination_is_dir,
            artifact,
            artifact_hash,
            destination_file,
            installed,
        })
    }
}
