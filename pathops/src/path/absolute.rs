//! Absolute path resolution.

use crate::error::Result;
use crate::platform::{self, PlatformPaths};

/// Resolve `path` to an absolute, canonical form.
///
/// The path does not have to exist. On POSIX its nearest existing ancestor
/// is canonicalized (symlinks resolved) and the missing remainder is
/// appended unchanged; on Windows the OS full-path primitive is used.
///
/// # Errors
///
/// Returns [`Error::PathResolution`](crate::Error::PathResolution) if the
/// existing portion cannot be resolved, for example on a permission error.
///
/// # Examples
///
/// ```no_run
/// use pathops::path::absolute_path;
///
/// let resolved = absolute_path("out/eplusout.csv").unwrap();
/// assert!(std::path::Path::new(&resolved).is_absolute());
/// ```
pub fn absolute_path(path: &str) -> Result<String> {
    platform::native().resolve_absolute(path)
}
