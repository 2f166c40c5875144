//! Chat front-end settings.

use serde::{Deserialize, Serialize};

/// Front-end defaults: who the assistant is called and which persona
/// seeds the first system instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings {
    /// Display name only; never sent to the model.
    pub assistant_name: String,
    pub default_persona: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            assistant_name: "Arti AI".into(),
            default_persona: "Default Assistant".into(),
        }
    }
}

/// A user-defined persona from `[[personas]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaEntry {
    pub name: String,
    pub instruction: String,
}
