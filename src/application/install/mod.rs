//! Install Module
//!
//! The artifact installer: skip, or replace-and-copy one file into the mods directory.
//!
//! ## Usage
//!
//! ```ignore
//! use modinstall::application::install::{InstallOptions, InstallUseCase};
//!
//! let use_case = InstallUseCase::new(LocalFs::new());
//! let outcome = use_case.execute(&config.directive(), &InstallOptions::default())?;
//! ```

mod use_case;

pub use use_case::{InstallOptions, InstallUseCase};
