//! File-based configuration loading

use super::model::Config;
use crate::error::{TracemonError, TracemonResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load configuration from a file
///
/// Supports JSON and TOML formats based on file extension.
/// Returns default config if file doesn't exist.
pub fn load_from_file(path: &Path) -> TracemonResult<Config> {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path).map_err(|e| {
        TracemonError::config_with_context(
            format!("Failed to read config file: {}", e),
            path.display().to_string(),
        )
    })?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            TracemonError::config_with_context(
                format!("Failed to parse TOML config: {}", e),
                path.display().to_string(),
            )
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            TracemonError::config_with_context(
                format!("Failed to parse JSON config: {}", e),
                path.display().to_string(),
            )
        })?,
    };

    debug!("Loaded config from {:?}", path);
    Ok(config)
}
