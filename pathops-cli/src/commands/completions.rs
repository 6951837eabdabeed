//! Shell completion generation command.
//!
//! Generates completion scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "pathops";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        let hint = match self.shell {
            Shell::Bash => Some(
                "pathops completions bash > ~/.local/share/bash-completion/completions/pathops",
            ),
            Shell::Zsh => Some("pathops completions zsh > ~/.zsh/completions/_pathops"),
            Shell::Fish => {
                Some("pathops completions fish > ~/.config/fish/completions/pathops.fish")
            }
            Shell::PowerShell => {
                Some("pathops completions powershell | Out-String | Invoke-Expression")
            }
            _ => None,
        };
        if let Some(hint) = hint {
            global.logger.info(&format!("Install with: {hint}"));
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
