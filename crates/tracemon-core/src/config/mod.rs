//! Configuration for tracemon
//!
//! Values are layered: built-in defaults, then an optional config file
//! (JSON or TOML), then `TRACEMON_*` environment variables. Command-line
//! flags are applied last by the server binary.

mod env_loader;
mod file_loader;
mod logging_config;
mod model;

pub use env_loader::apply_env;
pub use file_loader::load_from_file;
pub use logging_config::{LogFormat, LoggingConfig};
pub use model::{Config, MonitorConfig, ServerConfig, StorageConfig};

use crate::error::TracemonResult;
use std::path::Path;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "tracemon.json";

impl Config {
    /// Load configuration from `path` (missing file means defaults) and
    /// apply environment overrides on top.
    pub fn load(path: &Path) -> TracemonResult<Self> {
        let config = load_from_file(path)?;
        apply_env(config, |key| std::env::var(key).ok())
    }
}
