//! Event types for `--json` output.
//!
//! Every event carries an `event` tag; paths are rendered with `display()`.

use std::path::Path;

use serde::Serialize;

use modinstall::application::{CheckReport, Step};
use modinstall::{InstallError, InstallOutcome, SkipReason};

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkipEvent {
    pub event: &'static str,
    pub reason: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SkipEvent {
    pub fn new(reason: &SkipReason) -> Self {
        let path = match reason {
            SkipReason::ConfigurationAbsent => None,
            SkipReason::DestinationMissing(p) | SkipReason::ArtifactInDestination(p) => {
                Some(display(p))
            }
        };
        Self {
            event: "skip",
            reason: reason.code(),
            message: reason.to_string(),
            path,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallEvent {
    pub event: &'static str,
    pub artifact: String,
    pub destination_file: String,
    pub bytes: u64,
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedEvent {
    pub event: &'static str,
    pub artifact: String,
    pub destination_file: String,
    pub replace: bool,
}

/// Emit the event matching an install outcome
pub fn outcome_event(outcome: &InstallOutcome) -> serde_json::Value {
    let value = match outcome {
        InstallOutcome::Skipped(reason) => serde_json::to_value(SkipEvent::new(reason)),
        InstallOutcome::Installed {
            artifact,
            destination_file,
            bytes,
            replaced,
        } => serde_json::to_value(InstallEvent {
            event: "install",
            artifact: display(artifact),
            destination_file: display(destination_file),
            bytes: *bytes,
            replaced: *replaced,
        }),
        InstallOutcome::Planned {
            artifact,
            destination_file,
            replace,
        } => serde_json::to_value(PlannedEvent {
            event: "planned",
            artifact: display(artifact),
            destination_file: display(destination_file),
            replace: *replace,
        }),
    };
    value.unwrap_or(serde_json::Value::Null)
}

#[derive(Debug, Clone, Serialize)]
pub struct StepEvent {
    pub event: &'static str,
    pub index: usize,
    pub step: &'static str,
    /// "started" or "finished"
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl StepEvent {
    pub fn new(index: usize, step: &Step, status: &'static str) -> Self {
        let command = match step {
            Step::Build(cmd) => Some(cmd.to_string()),
            Step::Install => None,
        };
        Self {
            event: "step",
            index,
            step: step.name(),
            status,
            command,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent {
    pub event: &'static str,
    pub ready: bool,
    pub mods_dir: Option<String>,
    pub mods_dir_exists: bool,
    pub mods_dir_is_dir: bool,
    pub artifact: Option<String>,
    pub artifact_hash: Option<String>,
    pub destination_file: Option<String>,
    pub installed: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<&'static str>,
}

impl CheckEvent {
    pub fn new(report: &CheckReport) -> Self {
        Self {
            event: "check",
            ready: report.is_ready(),
            mods_dir: report.destination.as_deref().map(display),
            mods_dir_exists: report.destination_exists,
            mods_dir_is_dir: report.destination_is_dir,
            artifact: report.artifact.as_deref().map(display),
            artifact_hash: report.artifact_hash.as_ref().map(|h| h.to_string()),
            destination_file: report.destination_file.as_deref().map(display),
            installed: report.installed.label(),
            skip: report.skip_reason().map(|r| r.code()),
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "error",
            message: message.into(),
            path: None,
        }
    }

    pub fn from_install_error(err: &InstallError) -> Self {
        Self {
            path: err.path().map(display),
            ..Self::new(err.to_string())
        }
    }
}
