//! Configuration validation.
//!
//! Each check pushes a message; all problems are reported together in a
//! single `ConfigError::ValidationError`.

mod helpers;


use std::collections::HashSet;

use crate::schema::ArtiConfig;
use arti_common::ConfigError;
use tracing::warn;

use helpers::{validate_range, validate_range_f64};

const MAX_ASSISTANT_NAME_CHARS: usize = 40;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ArtiConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_gemini(&mut errors, config);
    validate_chat(&mut errors, config);
    validate_personas(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate `config` and log any problems as a warning.
///
/// Returns `true` when the config is valid. Invalid values are still used by
/// the caller, so this only reports.
pub fn report(config: &ArtiConfig) -> bool {
    match validate(config) {
        Ok(()) => true,
        Err(e) => {
            warn!("{e}; continuing with parsed values");
            false
        }
    }
}

fn validate_gemini(errors: &mut Vec<String>, config: &ArtiConfig) {
    let gemini = &config.gemini;
    if gemini.model.trim().is_empty() {
        errors.push("gemini.model must not be empty".into());
    }
    if gemini.api_key_env.trim().is_empty() {
        errors.push("gemini.api_key_env must not be empty".into());
    }
    validate_range(errors, "gemini.timeout_secs", gemini.timeout_secs, 1, 600);
    if let Some(max) = gemini.max_output_tokens {
        validate_range(errors, "gemini.max_output_tokens", max, 1, 65536);
    }
    if let Some(temperature) = gemini.temperature {
        validate_range_f64(errors, "gemini.temperature", temperature, 0.0, 2.0);
    }
}

fn validate_chat(errors: &mut Vec<String>, config: &ArtiConfig) {
    let name = config.chat.assistant_name.trim();
    if name.is_empty() {
        errors.push("chat.assistant_name must not be empty".into());
    } else if name.chars().count() > MAX_ASSISTANT_NAME_CHARS {
        errors.push(format!(
            "chat.assistant_name is longer than {MAX_ASSISTANT_NAME_CHARS} characters"
        ));
    }
}

// Instructions are not checked; any string is forwarded to the model.
fn validate_personas(errors: &mut Vec<String>, config: &ArtiConfig) {
    let mut seen = HashSet::new();
    for (i, persona) in config.personas.iter().enumerate() {
        let name = persona.name.trim();
        if name.is_empty() {
            errors.push(format!("personas[{i}].name must not be empty"));
        } else if !seen.insert(name.to_string()) {
            errors.push(format!("personas[{i}].name \"{name}\" is defined twice"));
        }
    }
}
