//! Platform report and executable self-location.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, ValueEnum};
use pathops::fs::current_executable_path;
use pathops::{Platform, Shell};
use serde::Serialize;
use std::io::Write;

/// Output format for the info command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned key/value lines
    Human,
    /// JSON object
    Json,
}

/// What the running build knows about its platform.
#[derive(Debug, Serialize)]
pub struct PlatformReport {
    pub platform: Platform,
    pub native_separator: char,
    pub alt_separator: char,
    pub exe_extension: String,
    pub directory_mode: String,
    pub shell: Shell,
    pub executable: Option<String>,
}

impl PlatformReport {
    /// Collect the report from the build target and the effective config.
    pub fn collect(global: &GlobalOptions) -> Self {
        let platform = Platform::current();
        let executable = match current_executable_path() {
            Ok(path) => Some(path.display().to_string()),
            Err(e) => {
                global
                    .logger
                    .warn(&format!("Could not locate executable: {e}"));
                None
            }
        };

        Self {
            platform,
            native_separator: platform.native_separator(),
            alt_separator: platform.alt_separator(),
            exe_extension: global.config.exe_extension().to_string(),
            directory_mode: format!("{:o}", global.config.directory_mode()),
            shell: global.config.shell(),
            executable,
        }
    }
}

/// Show platform conventions and the effective configuration.
#[derive(Args)]
pub struct InfoCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: OutputFormat,
}

impl InfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let report = PlatformReport::collect(global);
        match self.format {
            OutputFormat::Human => format_as_human(&report),
            OutputFormat::Json => format_as_json(&report),
        }
    }
}

fn format_as_human(report: &PlatformReport) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "platform:          {}", report.platform)?;
    writeln!(handle, "native separator:  {}", report.native_separator)?;
    writeln!(handle, "alt separator:     {}", report.alt_separator)?;
    writeln!(handle, "exe extension:     {}", report.exe_extension)?;
    writeln!(handle, "directory mode:    {}", report.directory_mode)?;
    writeln!(handle, "shell:             {}", report.shell)?;
    writeln!(
        handle,
        "executable:        {}",
        report.executable.as_deref().unwrap_or("(unknown)")
    )?;

    Ok(())
}

fn format_as_json(report: &PlatformReport) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, report)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}

/// Print the path of the running executable.
#[derive(Args)]
pub struct ExePathCommand {}

impl ExePathCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let path = current_executable_path()?;
        println!("{}", path.display());
        Ok(())
    }
}
