//! Platform capabilities.
//!
//! Everything that differs between operating systems lives behind
//! [`PlatformPaths`]. The rest of the crate talks to [`native()`], which is
//! the implementation compiled for the current target:
//!
//! - [`PosixPaths`] on Unix-like systems (Linux, macOS, the BSDs)
//! - [`WindowsPaths`] on Windows
//!
//! Resolution of non-existent paths on POSIX is written once, in
//! [`resolve_by_walking_up`], against the trait.
//!
//! # Examples
//!
//! ```
//! use pathops::platform::{Platform, PlatformPaths};
//!
//! let paths = pathops::platform::native();
//! assert_eq!(paths.platform(), Platform::current());
//! ```

#[cfg(unix)]
mod posix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use posix::PosixPaths;
#[cfg(windows)]
pub use windows::WindowsPaths;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::path::separator::{parent_directory_with, CURRENT_DIR};

/// Operating-system family the crate was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Microsoft Windows.
    Windows,
    /// Unix-like systems.
    Posix,
}

impl Platform {
    /// The platform of the running build.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Separator the OS uses between path segments.
    #[must_use]
    pub const fn native_separator(self) -> char {
        match self {
            Self::Windows => '\\',
            Self::Posix => '/',
        }
    }

    /// Separator accepted in input and rewritten by normalization.
    #[must_use]
    pub const fn alt_separator(self) -> char {
        match self {
            Self::Windows => '/',
            Self::Posix => '\\',
        }
    }

    /// Suffix of executable files.
    ///
    /// ```
    /// use pathops::platform::Platform;
    ///
    /// assert_eq!(Platform::Windows.exe_extension(), ".exe");
    /// assert_eq!(Platform::Posix.exe_extension(), "");
    /// ```
    #[must_use]
    pub const fn exe_extension(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Posix => "",
        }
    }

    /// Command interpreter used by `run_command`.
    #[must_use]
    pub fn default_shell(self) -> Shell {
        match self {
            Self::Windows => Shell::new("cmd", "/C"),
            Self::Posix => Shell::new("sh", "-c"),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => write!(f, "windows"),
            Self::Posix => write!(f, "posix"),
        }
    }
}

/// A command interpreter and the flag that makes it run one command string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shell {
    /// Program to execute, looked up on `PATH`.
    pub program: String,
    /// Flag preceding the command string.
    pub flag: String,
}

impl Shell {
    /// Creates a shell description.
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// Builds the process that runs `command` through this shell.
    #[must_use]
    pub fn command(&self, command: &str) -> Command {
        let mut process = Command::new(&self.program);
        process.arg(&self.flag).arg(command);
        process
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.flag)
    }
}

/// OS primitives the path operations are built on.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformPaths {
    /// The platform this implementation targets.
    fn platform(&self) -> Platform;

    /// Whether `path` can be stat'ed.
    fn exists(&self, path: &Path) -> bool;

    /// Resolve an existing path to its canonical form.
    ///
    /// # Errors
    ///
    /// Returns the OS error when the path cannot be resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Resolve `path` to an absolute form. The path need not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathResolution`] when the OS cannot resolve it.
    fn resolve_absolute(&self, path: &str) -> Result<String>;

    /// Location of the running executable.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the image path cannot be queried.
    fn current_executable(&self) -> io::Result<PathBuf>;

    /// Create a single directory level with the given permission bits.
    ///
    /// # Errors
    ///
    /// Returns the OS error from the create call.
    fn make_directory(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Make `link` refer to `target`.
    ///
    /// # Errors
    ///
    /// Returns the OS error from the link (or copy) call.
    fn link_file(&self, target: &Path, link: &Path) -> io::Result<()>;
}

/// Resolve `path` by canonicalizing its nearest existing ancestor.
///
/// Walks up with [`parent_directory`](crate::path::parent_directory) until a
/// prefix exists, canonicalizes that prefix and reattaches the rest of the
/// input verbatim. When the walk ends at `"."` the whole input is the tail,
/// so a relative input resolves against the working directory.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if the existing prefix cannot be
/// canonicalized or if not even `"."` exists, and [`Error::InvalidPath`] if
/// the canonical prefix is not valid UTF-8.
pub fn resolve_by_walking_up<P>(paths: &P, path: &str) -> Result<String>
where
    P: PlatformPaths + ?Sized,
{
    let separator = paths.platform().native_separator();

    let mut existing = path.to_string();
    while !paths.exists(Path::new(&existing)) {
        if existing == CURRENT_DIR {
            return Err(Error::PathResolution {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no existing ancestor"),
            });
        }
        existing = parent_directory_with(&existing, separator);
    }

    let canonical = paths
        .canonicalize(Path::new(&existing))
        .map_err(|source| Error::PathResolution {
            path: path.to_string(),
            source,
        })?;
    let mut resolved = canonical
        .into_os_string()
        .into_string()
        .map_err(|raw| Error::InvalidPath {
            path: PathBuf::from(raw),
            reason: "canonical path is not valid UTF-8".to_string(),
        })?;

    let tail = if existing == path {
        ""
    } else if existing == CURRENT_DIR {
        path
    } else {
        &path[existing.len()..]
    };

    log::debug!("resolved existing prefix '{existing}' of '{path}' to '{resolved}'");

    if tail.is_empty() {
        return Ok(resolved);
    }
    if !resolved.ends_with(separator) {
        resolved.push(separator);
    }
    resolved.push_str(tail);
    Ok(resolved)
}

/// The [`PlatformPaths`] implementation for this build.
#[cfg(unix)]
pub type NativePaths = PosixPaths;

/// The [`PlatformPaths`] implementation for this build.
#[cfg(windows)]
pub type NativePaths = WindowsPaths;

/// Returns the [`PlatformPaths`] implementation for this build.
#[must_use]
pub const fn native() -> NativePaths {
    NativePaths::new()
}
