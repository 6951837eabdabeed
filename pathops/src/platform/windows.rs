//! Windows implementation of [`PlatformPaths`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{Platform, PlatformPaths};
use crate::error::{Error, Result};

/// Microsoft Windows.
///
/// Absolute resolution uses the OS full-path primitive, which does not
/// require the path to exist. There is no unprivileged symlink call, so
/// linking copies the file instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsPaths;

impl WindowsPaths {
    /// Creates the Windows implementation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PlatformPaths for WindowsPaths {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn resolve_absolute(&self, path: &str) -> Result<String> {
        // GetFullPathNameW, retried by std until the buffer is large enough.
        let absolute = std::path::absolute(path).map_err(|source| Error::PathResolution {
            path: path.to_string(),
            source,
        })?;
        absolute
            .into_os_string()
            .into_string()
            .map_err(|raw| Error::InvalidPath {
                path: PathBuf::from(raw),
                reason: "absolute path is not valid UTF-8".to_string(),
            })
    }

    fn current_executable(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }

    fn make_directory(&self, path: &Path, _mode: u32) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn link_file(&self, target: &Path, link: &Path) -> io::Result<()> {
        fs::copy(target, link).map(|_| ())
    }
}
