#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathops
//!
//! Cross-platform path and filesystem primitives for simulation tooling.
//!
//! Every operation is a one-shot wrapper around a single OS call or a plain
//! string manipulation; nothing is cached between calls.
//!
//! ## Modules
//!
//! - [`path`]: separator normalization, decomposition, absolute resolution
//! - [`fs`]: existence queries, directory creation, move/remove/link,
//!   shell commands, executable self-location
//! - [`platform`]: the [`Platform`] enumeration and the [`PlatformPaths`]
//!   capability trait with one implementation per OS family
//! - [`config`]: layered configuration
//! - [`error`] and [`logging`]: ambient error and diagnostic types
//!
//! ## Examples
//!
//! ```
//! use pathops::path::{file_extension, strip_extension};
//!
//! assert_eq!(file_extension("report.v2.idf"), "idf");
//! assert_eq!(strip_extension("report.v2.idf"), "report.v2");
//! ```
//!
//! Directory creation reports precondition failures as values:
//!
//! ```
//! use pathops::fs::create_directory;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let nested = dir.path().join("missing").join("out");
//! let err = create_directory(nested.to_str().unwrap()).unwrap_err();
//! assert!(err.is_precondition_violation());
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod path;
pub mod platform;

pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use platform::{Platform, PlatformPaths, Shell};
