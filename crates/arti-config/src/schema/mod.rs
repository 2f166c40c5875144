//! Configuration schema types for Arti.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod gemini;
mod logging;

pub use chat::*;
pub use gemini::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArtiConfig {
    pub gemini: GeminiSettings,
    pub chat: ChatSettings,
    pub logging: LoggingConfig,
    /// Extra personas appended to (or overriding) the built-in catalog.
    pub personas: Vec<PersonaEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gemini_settings() {
        let config = ArtiConfig::default();
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gemini.timeout_secs, 120);
        assert!(config.gemini.max_output_tokens.is_none());
        assert!(config.gemini.temperature.is_none());
        assert!(config.gemini.base_url.is_none());
    }

    #[test]
    fn default_chat_settings() {
        let config = ArtiConfig::default();
        assert_eq!(config.chat.assistant_name, "Arti AI");
        assert_eq!(config.chat.default_persona, "Default Assistant");
        assert!(config.personas.is_empty());
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn log_level_parses_lowercase() {
        let config: ArtiConfig = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.as_directive(), "debug");
    }

    #[test]
    fn personas_parse_as_array_of_tables() {
        let config: ArtiConfig = toml::from_str(
            r#"
[[personas]]
name = "Pirate"
instruction = "Talk like a pirate."

[[personas]]
name = "Terse"
instruction = ""
"#,
        )
        .unwrap();
        assert_eq!(config.personas.len(), 2);
        assert_eq!(config.personas[0].name, "Pirate");
        assert_eq!(config.personas[1].instruction, "");
    }
}
