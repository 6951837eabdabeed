//! Configuration schema definitions.

use serde::{Deserialize, Deserializer, Serialize};

use crate::fs::DEFAULT_DIRECTORY_MODE;
use crate::logging::LogLevel;
use crate::platform::{Platform, Shell};

/// Complete configuration structure.
///
/// Every field is optional; the accessor methods fall back to the values of
/// the running platform.
///
/// # Examples
///
/// ```
/// use pathops::config::Config;
///
/// let config = Config {
///     directory_mode: Some(0o750),
///     ..Default::default()
/// };
/// assert_eq!(config.directory_mode(), 0o750);
/// assert_eq!(config.exe_extension(), pathops::Platform::current().exe_extension());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Suffix appended to executable names.
    pub exe_extension: Option<String>,

    /// Permission bits for new directories on POSIX. Accepts an integer or an
    /// octal string such as `"750"`.
    #[serde(default, deserialize_with = "deserialize_mode")]
    pub directory_mode: Option<u32>,

    /// Command interpreter as `[program, flag]`.
    pub shell: Option<Vec<String>>,

    /// Log verbosity: `quiet`, `normal` or `verbose`.
    pub log_mode: Option<String>,
}

impl Config {
    /// Effective executable extension.
    #[must_use]
    pub fn exe_extension(&self) -> &str {
        self.exe_extension
            .as_deref()
            .unwrap_or_else(|| Platform::current().exe_extension())
    }

    /// Effective directory creation mode.
    #[must_use]
    pub fn directory_mode(&self) -> u32 {
        self.directory_mode.unwrap_or(DEFAULT_DIRECTORY_MODE)
    }

    /// Effective shell. Falls back to the platform default when the
    /// configured value is not a `[program, flag]` pair.
    #[must_use]
    pub fn shell(&self) -> Shell {
        match self.shell.as_deref() {
            Some([program, flag]) => Shell::new(program.clone(), flag.clone()),
            _ => Platform::current().default_shell(),
        }
    }

    /// Configured log level, if any parses.
    #[must_use]
    pub fn log_level(&self) -> Option<LogLevel> {
        self.log_mode
            .as_deref()
            .and_then(|mode| LogLevel::parse(mode).ok())
    }
}

/// Parse an octal permission string such as `"0750"` or `"0o750"`.
pub(crate) fn parse_octal_mode(s: &str) -> Option<u32> {
    let digits = s.trim();
    let digits = digits.strip_prefix("0o").unwrap_or(digits);
    u32::from_str_radix(digits, 8).ok()
}

fn deserialize_mode<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Helper {
        Number(u32),
        String(String),
    }

    match Option::<Helper>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Helper::Number(mode)) => Ok(Some(mode)),
        Some(Helper::String(s)) => parse_octal_mode(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("Invalid octal mode: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_platform() {
        let config = Config::default();
        assert_eq!(config.exe_extension(), Platform::current().exe_extension());
        assert_eq!(config.directory_mode(), 0o755);
        assert_eq!(config.shell(), Platform::current().default_shell());
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
exe_extension: ".bin"
directory_mode: "750"
shell: ["bash", "-c"]
log_mode: verbose
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.exe_extension(), ".bin");
        assert_eq!(config.directory_mode(), 0o750);
        assert_eq!(config.shell(), Shell::new("bash", "-c"));
        assert_eq!(config.log_level(), Some(LogLevel::Verbose));
    }

    #[test]
    fn test_directory_mode_as_integer() {
        let config: Config = serde_yaml::from_str("directory_mode: 488\n").unwrap();
        assert_eq!(config.directory_mode, Some(0o750));
    }

    #[test]
    fn test_directory_mode_invalid_string() {
        let result: Result<Config, _> = serde_yaml::from_str("directory_mode: \"rwx\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("ports: 5000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_octal_mode() {
        assert_eq!(parse_octal_mode("755"), Some(0o755));
        assert_eq!(parse_octal_mode("0o700"), Some(0o700));
        assert_eq!(parse_octal_mode("0755"), Some(0o755));
        assert_eq!(parse_octal_mode("8"), None);
    }
}
