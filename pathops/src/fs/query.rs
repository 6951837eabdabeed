//! Existence and type queries.
//!
//! All three follow symlinks and report `false` for anything that cannot be
//! stat'ed, including permission errors.

use std::fs;
use std::path::Path;

/// Whether `path` names anything at all.
///
/// ```
/// use pathops::fs::exists_path;
///
/// assert!(exists_path("."));
/// assert!(!exists_path("definitely/not/here"));
/// ```
pub fn exists_path<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).is_ok()
}

/// Whether `path` names a directory.
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Whether `path` names something other than a directory.
///
/// Devices, fifos and sockets count as files here.
pub fn is_regular_file<P: AsRef<Path>>(path: P) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}
