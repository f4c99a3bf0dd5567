//! Test environment for isolated Cookmate CLI runs.
//!
//! Provides `TestEnv` - a temp project directory plus a temp home so no user
//! config leaks in, and helpers to run the binary inside it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Cookmate CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as a JSON object
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON '{l}': {e}")))
            .collect()
    }

    /// The `{"event": "data"}` line
    pub fn data(&self) -> serde_json::Value {
        self.json_lines()
            .into_iter()
            .find(|v| v["event"] == "data")
            .unwrap_or_else(|| panic!("no data event in:\n{}", self.stdout))
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("project tempdir"),
            home_dir: TempDir::new().expect("home tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_cookmate")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Default kitchen document location
    pub fn store_path(&self) -> PathBuf {
        self.project_path(".data/cookmate.toml")
    }

    pub fn write_project_config(&self, content: &str) {
        std::fs::write(self.project_path("cookmate.toml"), content).expect("write config");
    }

    /// Run cookmate in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run cookmate with extra env vars
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
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("APPDATA", self.home_dir.path())
            .env("COOKMATE_LOG", "warn")
            .env("NO_COLOR", "1");
        for key in [
            "COOKMATE_BACKEND",
            "COOKMATE_DB_DIR",
            "COOKMATE_DB_FILE",
            "COOKMATE_LOG_FORMAT",
            "COOKMATE_EXPIRING_DAYS",
            "RUST_LOG",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute cookmate");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
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
