//! Application Layer
//!
//! Use cases that orchestrate the install flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `InstallUseCase` - Skip or copy the artifact into the mods directory
//! - `CheckUseCase` - Read-only report on the resolved install
//! - `Pipeline` - Ordered build-then-install steps for the post-build hook

pub mod check;
pub mod install;
pub mod pipeline;

pub use check::{CheckReport, CheckUseCase, InstalledState};
pub use install::{InstallOptions, InstallUseCase};
pub use pipeline::{Pipeline, PipelineEvent, Step};
