//! Build runner backed by `std::process::Command`.

use std::process::{Command, Stdio};

use crate::domain::ports::{BuildCommand, BuildRunner};
use crate::error::{InstallError, InstallResult};

/// Runs the build as a child process with inherited stdin.
///
/// In JSON mode the child's stdout is routed to our stderr so it cannot
/// interleave with NDJSON events.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessBuildRunner {
    pub json: bool,
}

impl ProcessBuildRunner {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl BuildRunner for ProcessBuildRunner {
    fn run(&self, command: &BuildCommand) -> InstallResult<()> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .current_dir(&command.cwd)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.json {
            cmd.stdout(Stdio::from(std::io::stderr()));
        } else {
            cmd.stdout(Stdio::inherit());
        }

        let status = cmd.status().map_err(|source| InstallError::BuildSpawn {
            command: command.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(InstallError::BuildFailed {
                command: command.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sh(script: &str) -> BuildCommand {
        BuildCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            cwd: PathBuf::from("."),
        }
    }

    #[test]
    fn successful_command_is_ok() {
        assert!(ProcessBuildRunner::new(true).run(&sh("exit 0")).is_ok());
    }

    #[test]
    fn failing_command_reports_exit_code() {
        let err = ProcessBuildRunner::new(true).run(&sh("exit 3")).unwrap_err();
        assert!(matches!(err, InstallError::BuildFailed { code: Some(3), .. }));
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let cmd = BuildCommand {
            program: "modinstall-definitely-not-a-program".to_string(),
            args: vec![],
            cwd: PathBuf::from("."),
        };
        let err = ProcessBuildRunner::new(true).run(&cmd).unwrap_err();
        assert!(matches!(err, InstallError::BuildSpawn { .. }));
    }

    #[test]
    fn runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = sh("touch built.marker");
        cmd.cwd = dir.path().to_path_buf();

        ProcessBuildRunner::new(true).run(&cmd).unwrap();

        assert!(dir.path().join("built.marker").exists());
    }
}
