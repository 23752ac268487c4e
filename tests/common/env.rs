//! Test environment builder for isolated deploy-recorder runs.
//!
//! Provides `TestEnv` - a temp project directory, optionally seeded with the
//! compiled VotingSystem artifact and a `deployer.toml`, plus helpers to run
//! the binary inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{VOTING_SYSTEM_ARTIFACT, VOTING_SYSTEM_ARTIFACT_PATH};

/// Variables that would leak the developer's shell into a test run
const SCRUBBED_ENV: &[&str] = &[
    "DEPLOYER_NETWORK",
    "DEPLOYER_DEPLOYMENTS_DIR",
    "DEPLOYER_PRIVATE_KEY",
    "RUST_LOG",
];

/// Result of running the binary
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

    /// Every stdout line parsed as JSON; panics on a non-JSON line
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run the binary from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the binary from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args).env("NO_COLOR", "1");
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute deploy-recorder");
        output_to_result(output)
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create directories");
        }
        std::fs::write(&full_path, content).expect("failed to write file");
    }

    pub fn read_project_file(&self, relative_path: &str) -> String {
        std::fs::read_to_string(self.project_path(relative_path))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative_path, e))
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    with_artifact: bool,
    config: Option<String>,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            with_artifact: false,
            config: None,
            files: Vec::new(),
        }
    }

    /// Place the compiled VotingSystem artifact under `artifacts/`
    pub fn with_voting_artifact(mut self) -> Self {
        self.with_artifact = true;
        self
    }

    /// Write `deployer.toml` at the project root
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config = Some(toml.to_string());
        self
    }

    pub fn with_file(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: tempfile::tempdir().expect("failed to create project dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deploy-recorder")),
        };

        if self.with_artifact {
            env.write_project_file(VOTING_SYSTEM_ARTIFACT_PATH, VOTING_SYSTEM_ARTIFACT);
        }
        if let Some(config) = &self.config {
            env.write_project_file("deployer.toml", config);
        }
        for (path, content) in &self.files {
            env.write_project_file(path, content);
        }
        env
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
