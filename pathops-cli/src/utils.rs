//! Utility functions for CLI operations.
//!
//! Global option handling, configuration loading and logger selection.

use crate::error::CliError;
use pathops::config::ConfigValidator;
use pathops::{init_logger, Config, ConfigBuilder, Logger};
use std::path::Path;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Diagnostic sink for this run.
    pub logger: Logger,

    /// Effective configuration.
    pub config: Config,
}

/// Load hierarchical configuration.
///
/// Precedence, highest first: environment, `--config` file, nearest
/// `pathops.yaml`, `~/.pathops/config.yaml`, platform defaults.
pub fn load_configuration(config_file: Option<&Path>) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = config_file {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the logger: CLI flags first, then the configured log mode.
pub fn select_logger(verbose: bool, quiet: bool, config: Option<&Config>) -> Logger {
    if verbose || quiet {
        return init_logger(verbose, quiet);
    }
    match config.and_then(Config::log_level) {
        Some(level) => Logger::new(level),
        None => init_logger(false, false),
    }
}

/// Parse an octal permission argument such as `750` or `0o750`.
///
/// Applies the same limit as the `directory_mode` setting.
pub fn parse_mode(s: &str) -> Result<u32, String> {
    ConfigValidator::parse_directory_mode(s).map_err(|e| e.to_string())
}
