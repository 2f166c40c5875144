//! Remote model (Gemini) settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini API settings. The API key itself never lives here; only the
/// name of the variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub model: String,
    pub api_key_env: String,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
    /// Omitted from requests when unset, leaving the model default.
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f64>,
    /// Override for the models endpoint, mainly for proxies and tests.
    pub base_url: Option<String>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            timeout_secs: 120,
            max_output_tokens: None,
            temperature: None,
            base_url: None,
        }
    }
}
