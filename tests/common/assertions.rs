//! Custom assertion macros for CLI and contract tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files
}

/// Assert that no record was written anywhere under the project.
///
/// # Example
/// ```ignore
/// assert_no_record!(env);
/// ```
#[macro_export]
macro_rules! assert_no_record {
    ($env:expr) => {
        let records: Vec<String> = $crate::common::list_all_files($env.project_root.path())
            .into_iter()
            .filter(|f| f.ends_with("_deployment.json"))
            .collect();
        assert!(
            records.is_empty(),
            "Expected no deployment record, found:\n  {}",
            records.join("\n  ")
        );
    };
}

/// Assert that the command failed with exit code 1.
#[macro_export]
macro_rules! assert_failed {
    ($result:expr) => {
        assert_eq!(
            $result.exit_code, 1,
            "Expected exit code 1.\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}

/// Assert that output contains expected text.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "unknown network");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($expected),
            "Expected output to contain '{}'.\nActual output:\n{}",
            $expected,
            combined
        );
    };
}
