//! String-level path commands.
//!
//! None of these touch the filesystem except `absolute`.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathops::path::{
    absolute_path, file_extension, file_name, native_path, parent_directory, strip_extension,
};

/// Rewrite alternate separators to the native one.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", native_path(&self.path));
        Ok(())
    }
}

/// Print the final segment of a path.
#[derive(Args)]
pub struct FileNameCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl FileNameCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", file_name(&native_path(&self.path)));
        Ok(())
    }
}

/// Print the parent directory of a path, including its trailing separator.
#[derive(Args)]
pub struct ParentCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", parent_directory(&native_path(&self.path)));
        Ok(())
    }
}

/// Print the text after the last dot.
#[derive(Args)]
pub struct ExtensionCommand {
    /// Path or file name
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ExtensionCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", file_extension(&self.path));
        Ok(())
    }
}

/// Print the text before the last dot.
#[derive(Args)]
pub struct StripExtensionCommand {
    /// Path or file name
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl StripExtensionCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", strip_extension(&self.path));
        Ok(())
    }
}

/// Resolve a path to absolute form. The path need not exist.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolved = absolute_path(&native_path(&self.path))?;
        global
            .logger
            .debug(&format!("{} resolved to {resolved}", self.path));
        println!("{resolved}");
        Ok(())
    }
}
