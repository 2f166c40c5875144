//! Async session operations: instruction changes and message sends.

use arti_common::new_correlation_id;
use tracing::{debug, info};

use crate::remote::{ChatProvider, RemoteChat};
use crate::{AiError, Turn};

use super::manager::SessionState;
use super::types::InstructionChange;

impl SessionState {
    /// Make `text` the active system instruction.
    ///
    /// Identical text with a session already bound is a no-op. Otherwise the
    /// old handle is dropped first, the transcript is cleared if the text
    /// changed, and a new remote session is opened for `text`. If opening
    /// fails the session is left uninitialized with the new instruction and
    /// an empty transcript; the next `send_message` retries the open.
    pub async fn set_instruction(
        &mut self,
        provider: &dyn ChatProvider,
        text: impl Into<String>,
    ) -> Result<InstructionChange, AiError> {
        let text = text.into();
        if self.handle.is_some() && self.active_instruction == text {
            debug!(session = %self.id.short(), "instruction unchanged");
            return Ok(InstructionChange::Unchanged);
        }

        let changed = self.active_instruction != text;
        self.handle = None;
        if changed {
            self.active_instruction = text;
            self.transcript.clear();
        }

        let chat = self.open(provider).await?;
        self.handle = Some(chat);

        Ok(if changed {
            InstructionChange::Reset
        } else {
            InstructionChange::Bound
        })
    }

    /// Send a user message and return the assistant's reply.
    ///
    /// The user turn is appended before the request goes out and stays
    /// there if the request fails; the assistant turn is appended only on
    /// success.
    pub async fn send_message(
        &mut self,
        provider: &dyn ChatProvider,
        text: impl Into<String>,
    ) -> Result<String, AiError> {
        let text = text.into();
        let chat = match self.handle.take() {
            Some(chat) => chat,
            None => self.open(provider).await?,
        };
        let chat = self.handle.insert(chat);
        debug_assert_eq!(chat.system_instruction(), self.active_instruction);

        let request = new_correlation_id();
        debug!(session = %self.id.short(), %request, chars = text.len(), "sending message");
        self.transcript.push(Turn::user(text.as_str()));

        match chat.send(&text).await {
            Ok(response) => {
                self.tracker.record(&response.usage);
                debug!(
                    session = %self.id.short(),
                    %request,
                    tokens = response.usage.total_tokens(),
                    "reply received"
                );
                self.transcript.push(Turn::assistant(response.content.clone()));
                Ok(response.content)
            }
            Err(e) => {
                debug!(session = %self.id.short(), %request, error = %e, "send failed");
                Err(e)
            }
        }
    }

    async fn open(&mut self, provider: &dyn ChatProvider) -> Result<Box<dyn RemoteChat>, AiError> {
        let chat = provider.create_session(&self.active_instruction).await?;
        self.generation += 1;
        info!(
            session = %self.id.short(),
            generation = self.generation,
            instruction_chars = self.active_instruction.len(),
            "bound remote chat session"
        );
        Ok(chat)
    }
}
