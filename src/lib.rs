//! modinstall - copy a freshly built mod jar into a local mods directory
//!
//! Replaces the `installMod` step of a mod's Gradle build: after the build, the
//! release jar is copied into the directory named by `modsDir`, replacing any
//! previous copy. With no `modsDir`, or a `modsDir` that doesn't exist, the
//! install is skipped.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    CheckReport, CheckUseCase, InstallOptions, InstallUseCase, InstalledState, Pipeline,
    PipelineEvent, Step,
};
pub use config::{Config, ConfigLoader, ConfigOverrides};
pub use domain::entities::{ArtifactSpec, DeploymentDirective, InstallOutcome, SkipReason};
pub use domain::value_objects::ContentHash;
pub use error::{InstallError, InstallResult};
pub use infrastructure::{LocalFs, ProcessBuildRunner};
