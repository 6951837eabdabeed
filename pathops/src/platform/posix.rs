//! Unix-like implementation of [`PlatformPaths`].

use std::fs;
use std::io;
use std::os::unix::fs::DirBuilderExt;
use std::path::{Path, PathBuf};

use super::{resolve_by_walking_up, Platform, PlatformPaths};
use crate::error::Result;

/// Linux, macOS and other Unix-like systems.
///
/// `realpath` only accepts existing paths, so absolute resolution goes
/// through [`resolve_by_walking_up`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PosixPaths;

impl PosixPaths {
    /// Creates the POSIX implementation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlatformPaths for PosixPaths {
    fn platform(&self) -> Platform {
        Platform::Posix
    }

    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn resolve_absolute(&self, path: &str) -> Result<String> {
        resolve_by_walking_up(self, path)
    }

    fn current_executable(&self) -> io::Result<PathBuf> {
        // Backed by /proc/self/exe on Linux and _NSGetExecutablePath on macOS.
        std::env::current_exe()
    }

    fn make_directory(&self, path: &Path, mode: u32) -> io::Result<()> {
        fs::DirBuilder::new().mode(mode).create(path)
    }

    fn link_file(&self, target: &Path, link: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(target, link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    #[test]
    fn test_make_directory_applies_mode() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("restricted");

        PosixPaths::new().make_directory(&target, 0o700).unwrap();

        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn test_link_file_creates_symlink() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("in.idf");
        let link = dir.path().join("in.link");
        fs::write(&target, "Version,9.0;").unwrap();

        PosixPaths::new().link_file(&target, &link).unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&link).unwrap(), "Version,9.0;");
    }

    #[test]
    fn test_resolve_absolute_of_missing_child() {
        let dir = tempdir().unwrap();
        let base = fs::canonicalize(dir.path()).unwrap();
        let missing = format!("{}/out/eplusout.csv", dir.path().display());

        let resolved = PosixPaths::new().resolve_absolute(&missing).unwrap();
        assert_eq!(resolved, format!("{}/out/eplusout.csv", base.display()));
    }
}
