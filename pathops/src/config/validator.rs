//! Configuration validation.

use crate::config::schema::{parse_octal_mode, Config};
use crate::error::{Error, Result};
use crate::logging::LogLevel;
use crate::path::{ALT_SEPARATOR, NATIVE_SEPARATOR};

/// Highest permission value accepted for `directory_mode`.
const MAX_MODE: u32 = 0o7777;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use pathops::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { directory_mode: Some(0o17777), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every field that is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref extension) = config.exe_extension {
            Self::validate_exe_extension(extension)?;
        }

        if let Some(mode) = config.directory_mode {
            Self::validate_directory_mode(mode)?;
        }

        if let Some(ref shell) = config.shell {
            Self::validate_shell(shell)?;
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }

    /// Parse an octal permission string and check it against the mode limit.
    ///
    /// Accepts the same forms as the configuration files: `750`, `0750`
    /// and `0o750`, with surrounding whitespace ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `s` is not octal or exceeds `7777`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathops::config::ConfigValidator;
    ///
    /// assert_eq!(ConfigValidator::parse_directory_mode("0o750").unwrap(), 0o750);
    /// assert!(ConfigValidator::parse_directory_mode("77777").is_err());
    /// ```
    pub fn parse_directory_mode(s: &str) -> Result<u32> {
        let mode = parse_octal_mode(s).ok_or_else(|| Error::Validation {
            field: "directory_mode".into(),
            message: format!("Invalid octal mode: '{s}'"),
        })?;
        Self::validate_directory_mode(mode)?;
        Ok(mode)
    }

    fn validate_directory_mode(mode: u32) -> Result<()> {
        if mode > MAX_MODE {
            return Err(Error::Validation {
                field: "directory_mode".into(),
                message: format!("Mode {mode:o} exceeds {MAX_MODE:o}"),
            });
        }
        Ok(())
    }

    fn validate_exe_extension(extension: &str) -> Result<()> {
        if extension.is_empty() {
            return Ok(());
        }
        if !extension.starts_with('.') {
            return Err(Error::Validation {
                field: "exe_extension".into(),
                message: format!("Extension '{extension}' must start with '.'"),
            });
        }
        if extension.contains(NATIVE_SEPARATOR) || extension.contains(ALT_SEPARATOR) {
            return Err(Error::Validation {
                field: "exe_extension".into(),
                message: format!("Extension '{extension}' must not contain a path separator"),
            });
        }
        Ok(())
    }

    fn validate_shell(shell: &[String]) -> Result<()> {
        match shell {
            [program, _flag] if !program.trim().is_empty() => Ok(()),
            [_, _] => Err(Error::Validation {
                field: "shell".into(),
                message: "Shell program must not be empty".into(),
            }),
            _ => Err(Error::Validation {
                field: "shell".into(),
                message: format!(
                    "Expected [program, flag], got {} element(s)",
                    shell.len()
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_exe_extension_rules() {
        for ok in ["", ".exe", ".bin"] {
            let config = Config {
                exe_extension: Some(ok.into()),
                ..Default::default()
            };
            assert!(ConfigValidator::validate(&config).is_ok(), "{ok}");
        }
        for bad in ["exe", "./x", ".a\\b"] {
            let config = Config {
                exe_extension: Some(bad.into()),
                ..Default::default()
            };
            assert!(ConfigValidator::validate(&config).is_err(), "{bad}");
        }
    }

    #[test]
    fn test_directory_mode_limit() {
        let ok = Config {
            directory_mode: Some(0o7777),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&ok).is_ok());

        let bad = Config {
            directory_mode: Some(0o10000),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&bad).unwrap_err();
        assert!(err.to_string().contains("directory_mode"));
    }

    #[test]
    fn test_parse_directory_mode() {
        assert_eq!(ConfigValidator::parse_directory_mode("750").unwrap(), 0o750);
        assert_eq!(ConfigValidator::parse_directory_mode(" 0o700 ").unwrap(), 0o700);
        assert_eq!(ConfigValidator::parse_directory_mode("7777").unwrap(), 0o7777);

        let err = ConfigValidator::parse_directory_mode("77777").unwrap_err();
        assert!(err.to_string().contains("exceeds"));
        assert!(ConfigValidator::parse_directory_mode("rwx").is_err());
    }

    #[test]
    fn test_shell_shape() {
        let ok = Config {
            shell: Some(vec!["bash".into(), "-c".into()]),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&ok).is_ok());

        for bad in [vec![], vec!["bash".into()], vec![" ".into(), "-c".into()]] {
            let config = Config {
                shell: Some(bad),
                ..Default::default()
            };
            assert!(ConfigValidator::validate(&config).is_err());
        }
    }

    #[test]
    fn test_log_mode() {
        let bad = Config {
            log_mode: Some("loud".into()),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&bad).unwrap_err();
        assert!(err.to_string().contains("log_mode"));
    }
}
