//! Common test utilities for CLI integration tests.
//!
//! Every command runs inside a fresh temporary working directory with its
//! own `HOME`, so user and project configuration never leak into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PATHOPS_ENV_VARS: &[&str] = &[
    "PATHOPS_CONFIG",
    "PATHOPS_EXE_EXTENSION",
    "PATHOPS_DIRECTORY_MODE",
    "PATHOPS_SHELL",
    "PATHOPS_LOG_MODE",
];

/// Isolated test environment.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Working directory for commands
    pub work_dir: PathBuf,
    /// Fake home directory
    pub home_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new environment with empty work and home directories.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        let work_dir = root.join("work");
        let home_dir = root.join("home");
        std::fs::create_dir(&work_dir).expect("Failed to create work dir");
        std::fs::create_dir(&home_dir).expect("Failed to create home dir");

        Self {
            temp_dir,
            work_dir,
            home_dir,
        }
    }

    /// Command for the pathops binary, run in the work directory.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathops").expect("Failed to find pathops binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env("USERPROFILE", &self.home_dir);
        for var in PATHOPS_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Path inside the work directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Create a subdirectory of the work directory.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file in the work directory with the given contents.
    pub fn create_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the project configuration file into the work directory.
    pub fn write_project_config(&self, yaml: &str) -> PathBuf {
        self.create_file("pathops.yaml", yaml)
    }

    /// Write the user configuration file into the fake home.
    pub fn write_user_config(&self, yaml: &str) -> PathBuf {
        let dir = self.home_dir.join(".pathops");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, yaml).expect("Failed to write user config");
        path
    }

    /// Run a command and return trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run pathops");
        assert!(
            output.status.success(),
            "pathops {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end_matches(['\n', '\r'])
            .to_string()
    }
}

/// Render a path argument for the command line.
#[allow(dead_code)]
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}
