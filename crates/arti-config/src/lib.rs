//! Arti configuration.
//!
//! TOML configuration with serde defaults for every field, validation,
//! and API key resolution.

pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::{ArtiConfig, ChatSettings, GeminiSettings, LogLevel, PersonaEntry};
pub use secrets::{resolve_api_key, ApiKey};

use std::path::Path;

use arti_common::ConfigError;

/// Load config from `path` when given, else from the platform default
/// location. Either way a missing file is created from the template.
pub fn load_config(path: Option<&Path>) -> Result<ArtiConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_or_create(path),
        None => toml_loader::load_default(),
    }
}
