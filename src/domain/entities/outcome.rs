//! Install outcomes
//!
//! An install run ends in exactly one of these, or in an `InstallError`.

use std::fmt;
use std::path::PathBuf;

/// Why an install was skipped. Skips are successes, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No mods directory configured, or configured empty
    ConfigurationAbsent,
    /// Mods directory configured but missing on disk
    DestinationMissing(PathBuf),
    /// The artifact already is the file in the mods directory
    ArtifactInDestination(PathBuf),
}

impl SkipReason {
    pub fn code(&self) -> &'static str {
        match self {
            SkipReason::ConfigurationAbsent => "configuration_absent",
            SkipReason::DestinationMissing(_) => "destination_missing",
            SkipReason::ArtifactInDestination(_) => "artifact_in_destination",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::ConfigurationAbsent => {
                write!(f, "modsDir not set in gradle-local.properties")
            }
            SkipReason::DestinationMissing(path) => {
                write!(f, "modsDir path does not exist: {}", path.display())
            }
            SkipReason::ArtifactInDestination(path) => {
                write!(f, "artifact is already in place: {}", path.display())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Skipped(SkipReason),
    Installed {
        artifact: PathBuf,
        destination_file: PathBuf,
        bytes: u64,
        /// A previous file of the same name was removed first
        replaced: bool,
    },
    /// Dry run: what `Installed` would have done
    Planned {
        artifact: PathBuf,
        destination_file: PathBuf,
        replace: bool,
    },
}

impl InstallOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, InstallOutcome::Skipped(_))
    }
}
