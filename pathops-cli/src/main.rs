//! Main entry point for the pathops CLI.
//!
//! Exposes the pathops primitives as subcommands:
//! - path strings: `normalize`, `file-name`, `parent`, `extension`,
//!   `strip-extension`, `absolute`
//! - queries: `exists`, `is-dir`, `is-file`
//! - mutation: `mkdir`, `mv`, `rm`, `ln`
//! - process: `run`, `exe-path`
//! - `info`, `validate`, `completions`

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use error::CliError;
use utils::{load_configuration, select_logger, GlobalOptions};

fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            select_logger(cli.verbose, cli.quiet, None).error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    };

    let logger = select_logger(cli.verbose, cli.quiet, Some(&config));
    logger.install();

    let global = GlobalOptions { logger, config };

    match dispatch(cli.command, &global) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            global.logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}

/// Execute the command, yielding the process exit status.
fn dispatch(command: Command, global: &GlobalOptions) -> Result<i32, CliError> {
    let result = match command {
        Command::Normalize(cmd) => cmd.execute(global),
        Command::FileName(cmd) => cmd.execute(global),
        Command::Parent(cmd) => cmd.execute(global),
        Command::Extension(cmd) => cmd.execute(global),
        Command::StripExtension(cmd) => cmd.execute(global),
        Command::Absolute(cmd) => cmd.execute(global),
        Command::ExePath(cmd) => cmd.execute(global),
        Command::Exists(cmd) => cmd.execute(global),
        Command::IsDir(cmd) => cmd.execute(global),
        Command::IsFile(cmd) => cmd.execute(global),
        Command::Mkdir(cmd) => cmd.execute(global),
        Command::Mv(cmd) => cmd.execute(global),
        Command::Rm(cmd) => cmd.execute(global),
        Command::Ln(cmd) => cmd.execute(global),
        Command::Run(cmd) => return cmd.execute(global),
        Command::Info(cmd) => cmd.execute(global),
        Command::Validate(cmd) => cmd.execute(global),
        Command::Completions(cmd) => cmd.execute(global),
    };
    result.map(|()| 0)
}
