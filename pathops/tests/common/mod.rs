//! Common test utilities for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A scratch directory with its canonical path, so expected absolute paths
/// compare equal on systems where the temp dir sits behind a symlink.
pub struct Sandbox {
    #[allow(dead_code)]
    dir: TempDir,
    /// Canonical root of the sandbox.
    pub root: PathBuf,
}

#[allow(dead_code)]
impl Sandbox {
    /// Creates an empty sandbox.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = dir.path().canonicalize().expect("failed to canonicalize temp dir");
        Self { dir, root }
    }

    /// Absolute path of `relative` inside the sandbox.
    pub fn join(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Absolute path of `relative` as a string.
    pub fn path_str(&self, relative: &str) -> String {
        as_str(&self.join(relative)).to_string()
    }

    /// Writes a file and returns its path.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.join(relative);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }
}

/// Borrow a test path as UTF-8.
#[allow(dead_code)]
pub fn as_str(path: &Path) -> &str {
    path.to_str().expect("test paths are UTF-8")
}
