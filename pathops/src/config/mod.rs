//! Layered configuration.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHOPS_*`)
//! 3. An explicit file (`ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `pathops.yaml`)
//! 5. User config (`~/.pathops/config.yaml`)
//! 6. Platform defaults
//!
//! # Examples
//!
//! ```no_run
//! use pathops::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("executables end in '{}'", config.exe_extension());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
