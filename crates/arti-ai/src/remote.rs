//! Remote chat sessions.
//!
//! A `ChatProvider` opens sessions; a `RemoteChat` is one open session,
//! bound for its whole life to the system instruction it was opened with.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiClient, AiError, AiResponse, Turn};

/// Factory for remote chat sessions.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn create_session(
        &self,
        system_instruction: &str,
    ) -> Result<Box<dyn RemoteChat>, AiError>;
}

/// Handle to one remote conversation.
#[async_trait]
pub trait RemoteChat: Send {
    /// The instruction this session was created with.
    fn system_instruction(&self) -> &str;

    /// Send one user message and wait for the full reply.
    async fn send(&mut self, text: &str) -> Result<AiResponse, AiError>;
}

/// A `RemoteChat` over a stateless `AiClient`, keeping the conversation
/// on the client side and replaying it with every request.
///
/// An exchange only enters the history once the reply has arrived, so a
/// failed send can be retried without duplicating the user message.
pub struct HistoryChat<C> {
    client: C,
    system_instruction: String,
    history: Vec<Turn>,
}

impl<C: AiClient> HistoryChat<C> {
    pub fn new(client: C, system_instruction: impl Into<String>) -> Self {
        Self {
            client,
            system_instruction: system_instruction.into(),
            history: Vec::new(),
        }
    }
}

#[async_trait]
impl<C: AiClient + 'static> RemoteChat for HistoryChat<C> {
    fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    async fn send(&mut self, text: &str) -> Result<AiResponse, AiError> {
        self.history.push(Turn::user(text));

        match self
            .client
            .generate(&self.system_instruction, &self.history)
            .await
        {
            Ok(response) => {
                self.history.push(Turn::assistant(response.content.clone()));
                Ok(response)
            }
            Err(e) => {
                self.history.pop();
                debug!(error = %e, "send failed, history rolled back");
                Err(e)
            }
        }
    }
}
