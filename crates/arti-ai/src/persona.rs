//! Persona catalog.
//!
//! A persona is a named preset system instruction. Picking one only seeds
//! the instruction text; sessions never remember which persona was used.

pub const DEFAULT_PERSONA: &str = "Default Assistant";
pub const DEFAULT_INSTRUCTION: &str = "You are a helpful, clear, and friendly assistant.";

const BUILTIN: &[(&str, &str)] = &[
    (DEFAULT_PERSONA, DEFAULT_INSTRUCTION),
    (
        "Tamil Persona 🇮🇳",
        "You are a friendly AI assistant who primarily responds in Tamil. \
         Use simple, conversational Tamil with occasional English words if helpful. \
         Be polite, warm, and culturally natural.",
    ),
    (
        "Telugu Persona 🇮🇳",
        "You are a friendly AI assistant who primarily responds in Telugu. \
         Use natural spoken Telugu, mixing light English where appropriate. \
         Keep the tone respectful and approachable.",
    ),
    (
        "Marathi Persona 🇮🇳",
        "You are a friendly AI assistant who primarily responds in Marathi. \
         Use clear, conversational Marathi with a warm and helpful tone.",
    ),
    (
        "Hindi Persona 🇮🇳",
        "You are a friendly AI assistant who primarily responds in Hindi. \
         Use simple, conversational Hindi with optional Hinglish where natural. \
         Keep responses polite and supportive.",
    ),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub name: String,
    pub instruction: String,
}

impl Persona {
    pub fn new(name: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instruction: instruction.into(),
        }
    }
}

/// Ordered, immutable-per-run list of personas with one marked default.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
    default_index: usize,
}

impl PersonaCatalog {
    /// The five built-in personas, `Default Assistant` first.
    pub fn builtin() -> Self {
        Self {
            personas: BUILTIN
                .iter()
                .map(|(name, instruction)| Persona::new(*name, *instruction))
                .collect(),
            default_index: 0,
        }
    }

    /// Add custom personas. A custom persona whose name matches an existing
    /// entry replaces it in place; others are appended in order.
    pub fn with_custom(mut self, custom: impl IntoIterator<Item = Persona>) -> Self {
        for persona in custom {
            match self.personas.iter_mut().find(|p| p.name == persona.name) {
                Some(existing) => existing.instruction = persona.instruction,
                None => self.personas.push(persona),
            }
        }
        self
    }

    /// Make `name` the default persona. Returns `false` (leaving the
    /// default unchanged) if no persona matches.
    pub fn set_default(&mut self, name: &str) -> bool {
        match self.index_of(name) {
            Some(index) => {
                self.default_index = index;
                true
            }
            None => false,
        }
    }

    /// Look up by exact name, then case-insensitive name, then 1-based index.
    pub fn find(&self, query: &str) -> Option<&Persona> {
        self.index_of(query).map(|i| &self.personas[i])
    }

    fn index_of(&self, query: &str) -> Option<usize> {
        let query = query.trim();
        if let Some(i) = self.personas.iter().position(|p| p.name == query) {
            return Some(i);
        }
        let lower = query.to_lowercase();
        if let Some(i) = self
            .personas
            .iter()
            .position(|p| p.name.to_lowercase() == lower)
        {
            return Some(i);
        }
        query
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=self.personas.len()).contains(n))
            .map(|n| n - 1)
    }

    pub fn default_persona(&self) -> &Persona {
        &self.personas[self.default_index]
    }

    /// First persona whose instruction is exactly `instruction`.
    pub fn matching_instruction(&self, instruction: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.instruction == instruction)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
