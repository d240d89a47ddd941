//! Install Use Case
//!
//! 1. No destination configured: skip
//! 2. Destination missing on disk: skip
//! 3. Resolve and check the artifact
//! 4. Remove a stale copy (failure is fatal, nothing is copied)
//! 5. Copy the artifact into place

use crate::domain::entities::{DeploymentDirective, InstallOutcome, SkipReason};
use crate::domain::ports::FileSystem;
use crate::error::{InstallError, InstallResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Resolve and report without touching the destination
    pub dry_run: bool,
}

/// Install use case, parameterized by the file system port
pub struct InstallUseCase<FS: FileSystem> {
    file_system: FS,
}

impl<FS: FileSystem> InstallUseCase<FS> {
    pub fn new(file_system: FS) -> Self {
        Self { file_system }
    }

    pub fn execute(
        &self,
        directive: &DeploymentDirective,
        options: &InstallOptions,
    ) -> InstallResult<InstallOutcome> {
        let fs = &self.file_system;

        let Some(destination) = directive.destination.as_deref() else {
            return Ok(InstallOutcome::Skipped(SkipReason::ConfigurationAbsent));
        };

        if !fs.exists(destination) {
            return Ok(InstallOutcome::Skipped(SkipReason::DestinationMissing(
                destination.to_path_buf(),
            )));
        }
        if !fs.is_dir(destination) {
            return Err(InstallError::DestinationNotDirectory {
                path: destination.to_path_buf(),
            });
        }

        let artifact = directive.artifact.resolve()?;
        if !fs.is_file(&artifact) {
            return Err(InstallError::ArtifactNotFound { path: artifact });
        }

        let destination_file = DeploymentDirective::destination_file(destination, &artifact)?;
        let replace = fs.exists(&destination_file);

        // Deleting the destination would delete the artifact itself.
        if replace && fs.same_file(&artifact, &destination_file) {
            return Ok(InstallOutcome::Skipped(SkipReason::ArtifactInDestination(
                destination_file,
            )));
        }

        if options.dry_run {
            return Ok(InstallOutcome::Planned {
                artifact,
                destination_file,
                replace,
            });
        }

        if replace {
            fs.remove_file(&destination_file)
                .map_err(|source| InstallError::StaleFileUndeletable {
                    path: destination_file.clone(),
                    source,
                })?;
        }

        let bytes = fs
            .copy_file(&artifact, &destination_file)
            .map_err(|source| InstallError::CopyFailed {
                from: artifact.clone(),
                to: destination_file.clone(),
                source,
            })?;

        Ok(InstallOutcome::Installed {
            artifact,
            destination_file,
            bytes,
            replaced: replace,
        })
    }
}
