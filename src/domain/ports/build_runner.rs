//! BuildRunner port - runs the external build that produces the artifact

use std::fmt;
use std::path::PathBuf;

use crate::error::InstallResult;

/// An external build invocation, e.g. `./gradlew build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the build
    pub cwd: PathBuf,
}

impl BuildCommand {
    /// Split a `[program, args...]` vector. Returns `None` when empty.
    pub fn from_argv(argv: &[String], cwd: PathBuf) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
            cwd,
        })
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs a build command to completion
pub trait BuildRunner {
    /// Run the command. Non-zero exit is `InstallError::BuildFailed`.
    fn run(&self, command: &BuildCommand) -> InstallResult<()>;
}
