//! External commands and self-location.

use std::path::PathBuf;
use std::process::ExitStatus;

use crate::error::{Error, Result};
use crate::platform::{self, Platform, PlatformPaths, Shell};

/// Run `command` through the platform shell and return its exit status.
///
/// The call blocks until the command finishes; stdio is inherited.
///
/// # Errors
///
/// Returns [`Error::CommandSpawn`] if the shell itself cannot be started.
///
/// # Examples
///
/// ```no_run
/// use pathops::fs::run_command;
///
/// let status = run_command("exit 3").unwrap();
/// assert_eq!(status, 3);
/// ```
pub fn run_command(command: &str) -> Result<i32> {
    run_command_with_shell(&Platform::current().default_shell(), command)
}

/// Run `command` through `shell` and return its exit status.
///
/// On POSIX a command terminated by a signal reports `128 + signal`, as a
/// shell would.
///
/// # Errors
///
/// Returns [`Error::CommandSpawn`] if the shell cannot be started.
pub fn run_command_with_shell(shell: &Shell, command: &str) -> Result<i32> {
    log::debug!("running '{command}' via {shell}");
    let status = shell
        .command(command)
        .status()
        .map_err(|source| Error::CommandSpawn {
            command: command.to_string(),
            source,
        })?;
    Ok(exit_code(status))
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    -1
}

/// Location of the running executable.
///
/// Queried from the OS on every call.
///
/// # Errors
///
/// Returns [`Error::Io`] if the OS cannot report the image path.
pub fn current_executable_path() -> Result<PathBuf> {
    Ok(platform::native().current_executable()?)
}
