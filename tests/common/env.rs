//! Test environment builder for isolated modinstall testing.
//!
//! Provides `TestEnv` - temp directories for the project, home and mods
//! directory, plus helpers to run the modinstall binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Environment variables that must not leak in from the developer's shell
const SCRUBBED_VARS: &[&str] = &[
    "MODINSTALL_MODS_DIR",
    "MODINSTALL_ARTIFACT",
    "MODINSTALL_BUILD_DIR",
    "GITHUB_ACTIONS",
    "CI",
];

/// Result of running a modinstall command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON events
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({}): {}", e, l))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Project directory holding gradle(-local).properties and build/
    pub project_root: TempDir,
    /// Stand-in for HOME
    pub home_dir: TempDir,
    /// Parent of the mods directory (the mods dir itself may not exist)
    pub mods_parent: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            mods_parent: TempDir::new().expect("Failed to create mods parent"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_modinstall")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// The mods directory (`<mods_parent>/mods`), not created until `create_mods_dir`
    pub fn mods_dir(&self) -> PathBuf {
        self.mods_parent.path().join("mods")
    }

    pub fn create_mods_dir(&self) -> PathBuf {
        let dir = self.mods_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create mods dir");
        dir
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: impl AsRef<[u8]>) {
        write_file(&self.project_path(relative_path), content.as_ref());
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content.as_bytes());
    }

    /// Write `gradle.properties` naming the project and version
    pub fn with_project(&self, name: &str, version: &str) -> &Self {
        self.write_project_file(
            "gradle.properties",
            format!("projectName={}\nprojectVersion={}\n", name, version),
        );
        self
    }

    /// Write `gradle-local.properties` with `modsDir` pointing at `dir`
    pub fn with_mods_dir_setting(&self, dir: &Path) -> &Self {
        let escaped = dir.display().to_string().replace('\\', "\\\\");
        self.write_project_file("gradle-local.properties", format!("modsDir={}\n", escaped));
        self
    }

    /// Write the release jar at `build/libs/<name>-<version>.jar`
    pub fn with_built_jar(&self, name: &str, version: &str, content: &[u8]) -> PathBuf {
        let relative = format!("build/libs/{}-{}.jar", name, version);
        self.write_project_file(&relative, content);
        self.project_path(&relative)
    }

    /// Run modinstall from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run modinstall from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run modinstall from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("MODINSTALL_TEST_HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("MODINSTALL_NO_COLOR", "1")
            .env("TERM", "dumb");

        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute modinstall");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
