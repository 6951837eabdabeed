//! Path strings: separators, decomposition and absolute resolution.
//!
//! # Normalization
//!
//! Input may mix the native separator with the platform's alternate one
//! (`\` on POSIX, `/` on Windows). [`normalize_path`] rewrites the alternate
//! separator so that the decomposition functions see a single delimiter.
//!
//! # Decomposition
//!
//! [`file_name`], [`parent_directory`], [`file_extension`] and
//! [`strip_extension`] are pure string operations.
//!
//! # Absolute resolution
//!
//! [`absolute_path`] resolves a path that may not exist yet. See
//! [`crate::platform::resolve_by_walking_up`] for the POSIX algorithm.
//!
//! # Examples
//!
//! ```
//! # #[cfg(unix)] {
//! use pathops::path::{file_name, parent_directory};
//!
//! let path = "/sim/out/eplusout.csv";
//! assert_eq!(parent_directory(path) + &file_name(path), path);
//! # }
//! ```

pub mod absolute;
pub mod separator;

pub use absolute::absolute_path;
pub use separator::{
    file_extension, file_name, native_path, normalize_path, parent_directory, strip_extension,
    ALT_SEPARATOR, CURRENT_DIR, NATIVE_SEPARATOR,
};
