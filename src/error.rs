//! Error types for modinstall
//!
//! Uses `thiserror` for library errors. Skips (no destination configured, destination
//! missing) are not errors; see `domain::SkipReason`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for modinstall operations
pub type InstallResult<T> = Result<T, InstallError>;

/// Main error type for modinstall operations
#[derive(Error, Debug)]
pub enum InstallError {
    /// An existing file at the destination could not be removed
    #[error("failed to replace existing mod at {}: {source}", path.display())]
    StaleFileUndeletable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not enough configuration to name the artifact
    #[error(
        "cannot determine which artifact to install - set projectName and projectVersion \
         in gradle.properties or pass --artifact"
    )]
    ArtifactUnresolved,

    /// Artifact path does not point at an existing file
    #[error("artifact not found: {}", path.display())]
    ArtifactNotFound { path: PathBuf },

    /// Configured destination exists but is a file
    #[error("mods directory is not a directory: {}", path.display())]
    DestinationNotDirectory { path: PathBuf },

    /// Copy into the destination failed
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file could not be parsed
    #[error("invalid config in {}: {message}", file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Build step exited unsuccessfully
    #[error("build command `{command}` failed{}", exit_suffix(.code))]
    BuildFailed { command: String, code: Option<i32> },

    /// Build command could not be started
    #[error("failed to start build command `{command}`: {source}")]
    BuildSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!(" with exit code {}", c),
        None => " (terminated by signal)".to_string(),
    }
}

impl InstallError {
    /// Path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            InstallError::StaleFileUndeletable { path, .. }
            | InstallError::ArtifactNotFound { path }
            | InstallError::DestinationNotDirectory { path } => Some(path),
            InstallError::CopyFailed { to, .. } => Some(to),
            InstallError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_error_display_stale_file() {
        let err = InstallError::StaleFileUndeletable {
            path: PathBuf::from("/tmp/mods/mymod-1.0.jar"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "failed to replace existing mod at /tmp/mods/mymod-1.0.jar: denied"
        );
    }

    #[test]
    fn test_error_display_build_failed() {
        let err = InstallError::BuildFailed {
            command: "./gradlew build".to_string(),
            code: Some(2),
        };
        assert_eq!(
            err.to_string(),
            "build command `./gradlew build` failed with exit code 2"
        );

        let err = InstallError::BuildFailed {
            command: "./gradlew build".to_string(),
            code: None,
        };
        assert!(err.to_string().ends_with("(terminated by signal)"));
    }

    #[test]
    fn test_error_path() {
        let err = InstallError::ArtifactNotFound {
            path: PathBuf::from("build/libs/a.jar"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("build/libs/a.jar")));
        assert_eq!(InstallError::ArtifactUnresolved.path(), None);
    }
}
