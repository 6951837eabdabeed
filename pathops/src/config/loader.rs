//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "pathops.yaml";

/// Name of the per-user directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".pathops";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use pathops::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None, None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files, lowest precedence first.
    ///
    /// 1. `{user_dir}/config.yaml`, defaulting to `~/.pathops/config.yaml`
    /// 2. the nearest `pathops.yaml` at or above `working_dir`
    /// 3. `extra_file`, which must exist when given
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed, or if
    /// `extra_file` does not exist.
    pub fn load_all(
        working_dir: &Path,
        user_dir: Option<&Path>,
        extra_file: Option<&Path>,
    ) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        if let Some(path) = extra_file {
            sources.push(ConfigSource {
                path: path.to_path_buf(),
                precedence: 3,
                config: Self::load_file(path)?,
            });
        }

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match home::home_dir() {
                Some(home) => home.join(USER_CONFIG_DIR).join("config.yaml"),
                None => {
                    log::debug!("no home directory; skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest `pathops.yaml` walking up from `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ConfigLoader::load_file(&temp_dir.path().join("config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "exe_extension: \".bin\"\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.exe_extension.as_deref(), Some(".bin"));
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("run").join("out");
        fs::create_dir_all(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "log_mode: quiet\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(source.config.log_mode.as_deref(), Some("quiet"));
    }

    #[test]
    fn test_discover_stops_at_nearest() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "log_mode: quiet\n").unwrap();
        fs::write(child.join(PROJECT_CONFIG_FILE), "log_mode: verbose\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.config.log_mode.as_deref(), Some("verbose"));
    }

    #[test]
    fn test_load_all_orders_by_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let user_dir = temp_dir.path().join("user");
        let project = temp_dir.path().join("project");
        fs::create_dir_all(&user_dir).unwrap();
        fs::create_dir_all(&project).unwrap();
        fs::write(user_dir.join("config.yaml"), "directory_mode: \"700\"\n").unwrap();
        fs::write(project.join(PROJECT_CONFIG_FILE), "directory_mode: \"750\"\n").unwrap();
        let extra = temp_dir.path().join("extra.yaml");
        fs::write(&extra, "directory_mode: \"755\"\n").unwrap();

        let sources =
            ConfigLoader::load_all(&project, Some(&user_dir), Some(&extra)).unwrap();
        let precedences: Vec<u8> = sources.iter().map(|s| s.precedence).collect();
        assert_eq!(precedences, vec![1, 2, 3]);
    }

    #[test]
    fn test_load_all_missing_extra_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");

        let result = ConfigLoader::load_all(temp_dir.path(), Some(temp_dir.path()), Some(&missing));
        assert!(result.is_err());
    }
}
