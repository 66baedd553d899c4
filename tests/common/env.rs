//! Test environment for isolated treeselect CLI runs.
//!
//! Every run gets its own working directory and config directory so a
//! developer's `treeselect.toml` or `TREESELECT_*` variables never leak in.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Environment variables the binary reads
const TREESELECT_VARS: &[&str] = &[
    "TREESELECT_CHECKABLE",
    "TREESELECT_MULTIPLE",
    "TREESELECT_EXPAND_ALL",
    "TREESELECT_SHOW_LINE",
    "TREESELECT_SHOW_ICON",
    "TREESELECT_AUTO_EXPAND_PARENT",
    "TREESELECT_VERBOSITY",
    "TREESELECT_UNICODE",
    "TREESELECT_LOG",
];

/// Result of running a treeselect CLI command
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

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid NDJSON line {line:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated working directory plus config home
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            config_home: tempfile::tempdir().expect("config tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_treeselect")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project root and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Run treeselect from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run treeselect from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.project_root.path(), args, env_vars)
    }

    fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("APPDATA", self.config_home.path())
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .env_remove("NO_COLOR");
        for var in TREESELECT_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to run treeselect");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
