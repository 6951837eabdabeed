//! Build script for pathops-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Mirror of the command structure in src/cli.rs; keep the two in sync.
fn build_cli() -> Command {
    let path = || Arg::new("path").value_name("PATH").required(true);

    Command::new("pathops")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Cross-platform path and filesystem primitives")
        .long_about(
            "Path string manipulation, absolute path resolution, directory creation, \
             file mutation and shell command execution with one behavior on every platform",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output, including error messages")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file, applied over discovered ones")
                .value_name("PATH")
                .global(true)
                .env("PATHOPS_CONFIG"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Rewrite alternate separators to the native one")
                .arg(path()),
            Command::new("file-name")
                .about("Print the final segment of a path")
                .arg(path()),
            Command::new("parent")
                .about("Print the parent directory of a path")
                .arg(path()),
            Command::new("extension")
                .about("Print the extension of a path")
                .arg(path()),
            Command::new("strip-extension")
                .about("Print a path without its extension")
                .arg(path()),
            Command::new("absolute")
                .about("Resolve a path, existing or not, to absolute form")
                .arg(path()),
            Command::new("exe-path").about("Print the path of the running executable"),
            Command::new("exists")
                .about("Report whether a path exists")
                .arg(path()),
            Command::new("is-dir")
                .about("Report whether a path is a directory")
                .arg(path()),
            Command::new("is-file")
                .about("Report whether a path is a non-directory")
                .arg(path()),
            Command::new("mkdir")
                .about("Create one directory level")
                .long_about(
                    "Create a directory whose parent exists. Exits 1 if the path is a \
                     non-directory or the parent is missing",
                )
                .arg(path())
                .arg(Arg::new("mode").long("mode").value_name("OCTAL")),
            Command::new("mv")
                .about("Rename a file or directory")
                .arg(Arg::new("source").value_name("SOURCE").required(true))
                .arg(Arg::new("dest").value_name("DEST").required(true))
                .arg(Arg::new("strict").long("strict").action(ArgAction::SetTrue)),
            Command::new("rm")
                .about("Delete a file or empty directory")
                .arg(path())
                .arg(Arg::new("strict").long("strict").action(ArgAction::SetTrue)),
            Command::new("ln")
                .about("Link a file (copies on Windows)")
                .arg(Arg::new("target").value_name("TARGET").required(true))
                .arg(Arg::new("link").value_name("LINK").required(true))
                .arg(Arg::new("strict").long("strict").action(ArgAction::SetTrue)),
            Command::new("run")
                .about("Run a command through the shell and exit with its status")
                .arg(
                    Arg::new("command")
                        .value_name("COMMAND")
                        .required(true)
                        .num_args(1..)
                        .trailing_var_arg(true),
                ),
            Command::new("info")
                .about("Show platform conventions and effective configuration")
                .arg(Arg::new("format").long("format").value_name("FORMAT")),
            Command::new("validate")
                .about("Validate a configuration file")
                .arg(Arg::new("config_path").value_name("CONFIG_PATH").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var_os("OUT_DIR")
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pathops.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
