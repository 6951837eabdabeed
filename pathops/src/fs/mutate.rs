//! Move, remove and link.
//!
//! The plain functions never report failure to the caller; a failed call is
//! logged at debug level and otherwise ignored. Use the `try_` variants when
//! the outcome matters.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::platform::{self, PlatformPaths};

/// Rename `source` to `destination`, replacing an existing file.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the OS rename fails, e.g. across
/// devices.
pub fn try_move_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<()> {
    fs::rename(source, destination)?;
    Ok(())
}

/// Rename `source` to `destination`, ignoring failure.
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) {
    let (source, destination) = (source.as_ref(), destination.as_ref());
    if let Err(e) = try_move_file(source, destination) {
        log::debug!(
            "ignoring failed move of {} to {}: {e}",
            source.display(),
            destination.display()
        );
    }
}

/// Delete the file or empty directory at `path`.
///
/// A symlink is removed itself, never its target. Directories must be empty.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the entry cannot be removed.
pub fn try_remove_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Delete the file or empty directory at `path`, ignoring failure.
///
/// ```
/// use pathops::fs::remove_file;
///
/// remove_file("no/such/file.tmp");
/// ```
pub fn remove_file<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    if let Err(e) = try_remove_file(path) {
        log::debug!("ignoring failed removal of {}: {e}", path.display());
    }
}

/// Make `link_name` refer to `target`.
///
/// Creates a symbolic link where the platform supports it and copies the
/// file on Windows, so callers must not rely on later changes to `target`
/// being visible through `link_name`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the link or copy fails.
pub fn try_link_file<P: AsRef<Path>, Q: AsRef<Path>>(target: P, link_name: Q) -> Result<()> {
    platform::native().link_file(target.as_ref(), link_name.as_ref())?;
    Ok(())
}

/// Make `link_name` refer to `target`, ignoring failure.
pub fn link_file<P: AsRef<Path>, Q: AsRef<Path>>(target: P, link_name: Q) {
    let (target, link_name) = (target.as_ref(), link_name.as_ref());
    if let Err(e) = try_link_file(target, link_name) {
        log::debug!(
            "ignoring failed link of {} to {}: {e}",
            link_name.display(),
            target.display()
        );
    }
}
