//! Custom assertion macros for CLI scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List the files in a directory (for failure messages)
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut files: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect()
        })
        .unwrap_or_default();
    files.sort();
    files
}

/// Assert that `dir/name` exists with exactly `content`.
///
/// # Example
/// ```ignore
/// assert_installed!(env.mods_dir(), "mymod-1.0.jar", b"jar bytes");
/// ```
#[macro_export]
macro_rules! assert_installed {
    ($dir:expr, $name:expr, $content:expr) => {
        let dir_buf = std::path::PathBuf::from($dir);
        let dir = dir_buf.as_path();
        let full_path = dir.join($name);
        let actual = std::fs::read(&full_path).unwrap_or_else(|e| {
            panic!(
                "Expected '{}' in {:?}, but reading it failed: {}\nFiles found: {:?}",
                $name,
                dir,
                e,
                $crate::common::list_files(dir)
            )
        });
        assert_eq!(
            actual,
            $content.to_vec(),
            "Installed '{}' does not hold the artifact's bytes",
            $name
        );
    };
}

/// Assert that output (stdout or stderr) contains expected pattern.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that output does NOT contain a pattern.
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            !$result.stdout.contains($pattern) && !$result.stderr.contains($pattern),
            "Expected output to NOT contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the command exited successfully, showing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.success,
            "Expected success, got exit code {}\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
