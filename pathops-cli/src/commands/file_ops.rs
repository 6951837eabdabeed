//! Move, remove and link commands.
//!
//! By default failures are ignored, matching the library's silent
//! operations. `--strict` reports them with exit code 5.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathops::fs::{
    link_file, move_file, remove_file, try_link_file, try_move_file, try_remove_file,
};
use std::path::PathBuf;

/// Rename a file or directory.
#[derive(Args)]
pub struct MvCommand {
    /// Existing path
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// New path
    #[arg(value_name = "DEST")]
    pub destination: PathBuf,

    /// Fail if the rename fails
    #[arg(long)]
    pub strict: bool,
}

impl MvCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.logger.info(&format!(
            "Moving {} to {}",
            self.source.display(),
            self.destination.display()
        ));
        if self.strict {
            try_move_file(&self.source, &self.destination)?;
        } else {
            move_file(&self.source, &self.destination);
        }
        Ok(())
    }
}

/// Delete a file or empty directory.
#[derive(Args)]
pub struct RmCommand {
    /// File or empty directory to delete
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Fail if the entry cannot be deleted
    #[arg(long)]
    pub strict: bool,
}

impl RmCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global
            .logger
            .info(&format!("Removing {}", self.path.display()));
        if self.strict {
            try_remove_file(&self.path)?;
        } else {
            remove_file(&self.path);
        }
        Ok(())
    }
}

/// Make LINK refer to TARGET (a symlink on POSIX, a copy on Windows).
#[derive(Args)]
pub struct LnCommand {
    /// Existing file the link points at
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Path of the link to create
    #[arg(value_name = "LINK")]
    pub link: PathBuf,

    /// Fail if the link cannot be created
    #[arg(long)]
    pub strict: bool,
}

impl LnCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        global.logger.info(&format!(
            "Linking {} -> {}",
            self.link.display(),
            self.target.display()
        ));
        if self.strict {
            try_link_file(&self.target, &self.link)?;
        } else {
            link_file(&self.target, &self.link);
        }
        Ok(())
    }
}
