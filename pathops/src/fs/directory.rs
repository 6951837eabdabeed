//! Directory creation.

use std::path::{Path, PathBuf};

use super::query::{exists_path, is_directory};
use crate::error::{Error, Result};
use crate::path::{absolute_path, parent_directory};
use crate::platform::{self, PlatformPaths};

/// Permission bits used by [`create_directory`] on POSIX (`rwxr-xr-x`).
pub const DEFAULT_DIRECTORY_MODE: u32 = 0o755;

/// Create `path` as a directory with [`DEFAULT_DIRECTORY_MODE`].
///
/// # Errors
///
/// See [`create_directory_with_mode`].
///
/// # Examples
///
/// ```
/// use pathops::fs::{create_directory, is_directory};
///
/// let dir = tempfile::tempdir().unwrap();
/// let out = dir.path().join("out");
/// let out = out.to_str().unwrap();
///
/// create_directory(out).unwrap();
/// create_directory(out).unwrap();
/// assert!(is_directory(out));
/// ```
pub fn create_directory(path: &str) -> Result<()> {
    create_directory_with_mode(path, DEFAULT_DIRECTORY_MODE)
}

/// Create `path` as a directory, one level only.
///
/// An existing directory is left alone. `mode` is ignored on Windows and is
/// subject to the process umask elsewhere.
///
/// # Errors
///
/// - [`Error::NotADirectory`] if `path` exists but is not a directory.
/// - [`Error::MissingParent`] if the parent of `path` does not exist.
/// - [`Error::PathResolution`] if the absolute path for either message
///   cannot be resolved.
/// - [`Error::Io`] if the OS refuses to create the directory.
pub fn create_directory_with_mode(path: &str, mode: u32) -> Result<()> {
    if exists_path(path) {
        if is_directory(path) {
            return Ok(());
        }
        return Err(Error::NotADirectory {
            path: PathBuf::from(absolute_path(path)?),
        });
    }

    let parent = parent_directory(path);
    if !exists_path(&parent) {
        return Err(Error::MissingParent {
            path: PathBuf::from(absolute_path(&parent)?),
        });
    }

    log::debug!("creating directory {path} with mode {mode:o}");
    platform::native().make_directory(Path::new(path), mode)?;
    Ok(())
}
