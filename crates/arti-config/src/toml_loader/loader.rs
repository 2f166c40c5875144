//! Core TOML config loading: read from path or platform default.

use crate::schema::ArtiConfig;
use arti_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Values are not validated here;
/// see [`crate::validation::report`].
pub fn load_from_path(path: &Path) -> Result<ArtiConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ArtiConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path`, writing the default template there first if it is absent.
pub fn load_or_create(path: &Path) -> Result<ArtiConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(ArtiConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/arti/config.toml`
/// On Linux: `~/.config/arti/config.toml`
pub fn load_default() -> Result<ArtiConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
