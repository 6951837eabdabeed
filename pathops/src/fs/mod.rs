//! Filesystem primitives.
//!
//! Thin wrappers over single OS calls:
//!
//! - [`query`]: existence and type checks that never fail
//! - [`directory`]: single-level directory creation with preconditions
//! - [`mutate`]: move, remove and link, each in a silent and a `try_` form
//! - [`process`]: shell commands and the running executable's location

pub mod directory;
pub mod mutate;
pub mod process;
pub mod query;

pub use directory::{create_directory, create_directory_with_mode, DEFAULT_DIRECTORY_MODE};
pub use mutate::{
    link_file, move_file, remove_file, try_link_file, try_move_file, try_remove_file,
};
pub use process::{current_executable_path, run_command, run_command_with_shell};
pub use query::{exists_path, is_directory, is_regular_file};
