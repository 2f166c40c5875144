//! Chat engine for Arti.
//!
//! Provides:
//! - a Gemini `generateContent` client
//! - remote chat sessions bound to a fixed system instruction
//! - the persona catalog
//! - `SessionState`, which keeps the transcript and the remote session
//!   consistent with the active instruction
//! - token usage tracking

pub mod gemini;
pub mod persona;
pub mod remote;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use persona::{Persona, PersonaCatalog, DEFAULT_INSTRUCTION, DEFAULT_PERSONA};
pub use remote::{ChatProvider, HistoryChat, RemoteChat};
pub use session::{InstructionChange, SessionState, SessionStatus};
pub use token_tracker::TokenTracker;

/// Stateless model call: one system instruction plus the whole
/// conversation so far, ending with the newest user turn.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        turns: &[Turn],
    ) -> Result<AiResponse, AiError>;
}

/// One message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Transport failure, timeout, or a 5xx from the service.
    #[error("remote unavailable: {0}")]
    RemoteUnavailable(String),
    /// The API refused the request (bad key, quota, blocked prompt, ...).
    #[error("remote rejected request (HTTP {status}): {message}")]
    RemoteRejected { status: u16, message: String },
    #[error("invalid system instruction: {0}")]
    InvalidInstruction(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("model returned no text (finish reason: {0})")]
    EmptyReply(String),
}
