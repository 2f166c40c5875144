//! API key lookup.
//!
//! Resolution order: the named environment variable, then a top-level key
//! of the same name in `<config dir>/arti/secrets.toml`. Blank values are
//! treated as missing.

use std::fmt;
use std::path::Path;

use arti_common::ConfigError;
use tracing::debug;

use crate::toml_loader::config_dir;

pub const SECRETS_FILE: &str = "secrets.toml";

/// A resolved API key. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Resolve the API key stored under `var`.
pub fn resolve_api_key(var: &str) -> Result<ApiKey, ConfigError> {
    let secrets_path = config_dir().ok().map(|dir| dir.join(SECRETS_FILE));
    resolve_with(var, std::env::var(var).ok(), secrets_path.as_deref())
}

pub(crate) fn resolve_with(
    var: &str,
    env_value: Option<String>,
    secrets_path: Option<&Path>,
) -> Result<ApiKey, ConfigError> {
    if let Some(value) = non_blank(env_value) {
        debug!(source = "env", var, "API key resolved");
        return Ok(ApiKey(value));
    }

    if let Some(path) = secrets_path {
        if let Some(value) = non_blank(read_secrets_file(path, var)?) {
            debug!(source = "secrets.toml", var, "API key resolved");
            return Ok(ApiKey(value));
        }
    }

    let hint = match secrets_path {
        Some(path) => format!("set {var} in the environment, a .env file, or {}", path.display()),
        None => format!("set {var} in the environment or a .env file"),
    };
    Err(ConfigError::MissingSecret(hint))
}

fn read_secrets_file(path: &Path, var: &str) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;
    let table: toml::Table = toml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!("failed to parse {}: {e}", path.display()))
    })?;
    Ok(table
        .get(var)
        .and_then(|v| v.as_str())
        .map(str::to_string))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
