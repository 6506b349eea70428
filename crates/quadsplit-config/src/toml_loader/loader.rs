//! Core TOML config loading: read from a string or a file path.

use crate::schema::LayoutConfig;
use crate::validation;
use quadsplit_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Parse a config from TOML text.
///
/// Missing fields take their defaults. A config that parses but fails
/// validation is returned as-is after logging a warning; the layout engine
/// clamps out-of-range values on use.
pub fn load_from_str(content: &str) -> Result<LayoutConfig, ConfigError> {
    let config: LayoutConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config with potentially invalid values");
    }

    Ok(config)
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = load_from_str(&content)?;
    info!("loaded layout config from {}", path.display());
    Ok(config)
}
