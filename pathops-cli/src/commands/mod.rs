//! CLI command implementations.
//!
//! - `path`: normalize, file-name, parent, extension, strip-extension, absolute
//! - `query`: exists, is-dir, is-file
//! - `mkdir`: single-level directory creation
//! - `file_ops`: mv, rm, ln
//! - `run`: shell command execution
//! - `info`: platform report and exe-path
//! - `validate`: configuration file check
//! - `completions`: shell completion scripts

pub mod completions;
pub mod file_ops;
pub mod info;
pub mod mkdir;
pub mod path;
pub mod query;
pub mod run;
pub mod validate;

pub use completions::CompletionsCommand;
pub use file_ops::{LnCommand, MvCommand, RmCommand};
pub use info::{ExePathCommand, InfoCommand};
pub use mkdir::MkdirCommand;
pub use path::{
    AbsoluteCommand, ExtensionCommand, FileNameCommand, NormalizeCommand, ParentCommand,
    StripExtensionCommand,
};
pub use query::{ExistsCommand, IsDirCommand, IsFileCommand};
pub use run::RunCommand;
pub use validate::ValidateCommand;
