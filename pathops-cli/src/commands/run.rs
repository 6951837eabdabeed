//! Command to run a shell command line.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathops::fs::run_command_with_shell;

/// Run a command through the configured shell and exit with its status.
#[derive(Args)]
pub struct RunCommand {
    /// Command line; multiple words are joined with spaces
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl RunCommand {
    /// Returns the exit status of the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<i32, CliError> {
        let shell = global.config.shell();
        let line = self.command.join(" ");

        global.logger.info(&format!("Running '{line}' via {shell}"));
        let status = run_command_with_shell(&shell, &line)?;
        global.logger.debug(&format!("Command exited with {status}"));

        Ok(status)
    }
}
