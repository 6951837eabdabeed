//! Command to create one directory level.

use crate::error::CliError;
use crate::utils::{parse_mode, GlobalOptions};
use clap::Args;
use pathops::fs::create_directory_with_mode;
use pathops::path::native_path;

/// Create a directory whose parent already exists.
///
/// Succeeds silently if the directory is already there.
#[derive(Args)]
pub struct MkdirCommand {
    /// Directory to create
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Permission bits in octal (defaults to the configured directory mode)
    #[arg(long, value_name = "OCTAL", value_parser = parse_mode)]
    pub mode: Option<u32>,
}

impl MkdirCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mode = self
            .mode
            .unwrap_or_else(|| global.config.directory_mode());
        let path = native_path(&self.path);

        global
            .logger
            .info(&format!("Creating directory {path} with mode {mode:o}"));
        create_directory_with_mode(&path, mode)?;

        Ok(())
    }
}
