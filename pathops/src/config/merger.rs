//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathops::config::{Config, ConfigMerger};
///
/// let low = Config { exe_extension: Some(".a".to_string()), ..Default::default() };
/// let high = Config { exe_extension: Some(".b".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.exe_extension(), ".b");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; every field set in `source` wins.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.exe_extension.is_some() {
            target.exe_extension.clone_from(&source.exe_extension);
        }

        if source.directory_mode.is_some() {
            target.directory_mode = source.directory_mode;
        }

        // Replaced as a whole; program and flag only make sense together.
        if source.shell.is_some() {
            target.shell.clone_from(&source.shell);
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }
    }
}
