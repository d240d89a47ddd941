//! Domain Entities
//!
//! - `DeploymentDirective` - what to install and where
//! - `ArtifactSpec` - how the artifact path is named
//! - `InstallOutcome` - terminal result of one install run

mod directive;
mod outcome;

pub use directive::{ArtifactSpec, DeploymentDirective};
pub use outcome::{InstallOutcome, SkipReason};
