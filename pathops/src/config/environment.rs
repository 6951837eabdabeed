//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//!
//! - `PATHOPS_EXE_EXTENSION`
//! - `PATHOPS_DIRECTORY_MODE` (octal, e.g. `750`)
//! - `PATHOPS_SHELL` (program and flag separated by whitespace)
//! - `PATHOPS_LOG_MODE`

use crate::config::schema::{parse_octal_mode, Config};
use crate::error::{Error, Result};
use crate::logging::LOG_MODE_ENV;
use std::env;

/// Applies `PATHOPS_*` environment overrides.
///
/// # Examples
///
/// ```no_run
/// use pathops::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `PATHOPS_DIRECTORY_MODE` is not an
    /// octal number.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(extension) = env::var("PATHOPS_EXE_EXTENSION") {
            config.exe_extension = Some(extension);
        }

        if let Ok(mode) = env::var("PATHOPS_DIRECTORY_MODE") {
            config.directory_mode = Some(parse_octal_mode(&mode).ok_or_else(|| {
                Error::Validation {
                    field: "PATHOPS_DIRECTORY_MODE".into(),
                    message: format!("Invalid octal mode: '{mode}'"),
                }
            })?);
        }

        if let Ok(shell) = env::var("PATHOPS_SHELL") {
            config.shell = Some(shell.split_whitespace().map(str::to_string).collect());
        }

        if let Ok(mode) = env::var(LOG_MODE_ENV) {
            config.log_mode = Some(mode);
        }

        Ok(())
    }
}
