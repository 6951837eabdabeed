//! Existence queries. Each prints `true` or `false` and exits 0.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathops::fs::{exists_path, is_directory, is_regular_file};
use std::path::PathBuf;

/// Report whether a path exists.
#[derive(Args)]
pub struct ExistsCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl ExistsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", exists_path(&self.path));
        Ok(())
    }
}

/// Report whether a path is a directory.
#[derive(Args)]
pub struct IsDirCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl IsDirCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", is_directory(&self.path));
        Ok(())
    }
}

/// Report whether a path exists and is not a directory.
#[derive(Args)]
pub struct IsFileCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl IsFileCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", is_regular_file(&self.path));
        Ok(())
    }
}
