//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CompletionsCommand, ExePathCommand, ExistsCommand, ExtensionCommand,
    FileNameCommand, InfoCommand, IsDirCommand, IsFileCommand, LnCommand, MkdirCommand,
    MvCommand, NormalizeCommand, ParentCommand, RmCommand, RunCommand, StripExtensionCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cross-platform path and filesystem primitives.
#[derive(Parser)]
#[command(name = "pathops")]
#[command(version, about = "Cross-platform path and filesystem primitives", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output, including error messages
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Additional configuration file, applied over discovered ones
    #[arg(long, value_name = "PATH", global = true, env = "PATHOPS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Rewrite alternate separators to the native one
    Normalize(NormalizeCommand),

    /// Print the final segment of a path
    FileName(FileNameCommand),

    /// Print the parent directory of a path
    Parent(ParentCommand),

    /// Print the extension of a path
    Extension(ExtensionCommand),

    /// Print a path without its extension
    StripExtension(StripExtensionCommand),

    /// Resolve a path, existing or not, to absolute form
    Absolute(AbsoluteCommand),

    /// Print the path of the running executable
    ExePath(ExePathCommand),

    /// Report whether a path exists
    Exists(ExistsCommand),

    /// Report whether a path is a directory
    IsDir(IsDirCommand),

    /// Report whether a path is a non-directory
    IsFile(IsFileCommand),

    /// Create one directory level
    Mkdir(MkdirCommand),

    /// Rename a file or directory
    Mv(MvCommand),

    /// Delete a file or empty directory
    Rm(RmCommand),

    /// Link a file (copies on Windows)
    Ln(LnCommand),

    /// Run a command through the shell and exit with its status
    Run(RunCommand),

    /// Show platform conventions and effective configuration
    Info(InfoCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
