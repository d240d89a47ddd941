//! Post-build pipeline
//!
//! An ordered list of typed steps. Each step runs only after the previous one
//! succeeded, so the install never sees a half-built artifact.

use std::fmt;

use crate::domain::entities::{DeploymentDirective, InstallOutcome};
use crate::domain::ports::{BuildCommand, BuildRunner, FileSystem};
use crate::error::InstallResult;

use super::install::{InstallOptions, InstallUseCase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Run the external build that produces the artifact
    Build(BuildCommand),
    /// Install the artifact named by the directive
    Install,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Build(_) => "build",
            Step::Install => "install",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Build(cmd) => write!(f, "build: {}", cmd),
            Step::Install => write!(f, "install"),
        }
    }
}

/// Progress reported while the pipeline runs
#[derive(Debug)]
pub enum PipelineEvent<'a> {
    StepStarted { index: usize, step: &'a Step },
    StepFinished { index: usize, step: &'a Step },
    Install(&'a InstallOutcome),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a build step
    pub fn build(mut self, command: BuildCommand) -> Self {
        self.steps.push(Step::Build(command));
        self
    }

    /// Append an install step
    pub fn install(mut self) -> Self {
        self.steps.push(Step::Install);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Run every step in order, stopping at the first error.
    ///
    /// Returns the outcome of the last install step, if there was one.
    pub fn run<FS, BR>(
        &self,
        installer: &InstallUseCase<FS>,
        runner: &BR,
        directive: &DeploymentDirective,
        options: &InstallOptions,
        mut on_event: impl FnMut(PipelineEvent<'_>),
    ) -> InstallResult<Option<InstallOutcome>>
    where
        FS: FileSystem,
        BR: BuildRunner,
    {
        let mut last_install = None;

        for (index, step) in self.steps.iter().enumerate() {
            on_event(PipelineEvent::StepStarted { index, step });

            match step {
                Step::Build(command) => runner.run(command)?,
                Step::Install => {
                    let outcome = installer.execute(directive, options)?;
                    on_event(PipelineEvent::Install(&outcome));
                    last_install = Some(outcome);
                }
            }

            on_event(PipelineEvent::StepFinished { index, step });
        }

        Ok(last_install)
    }
}
