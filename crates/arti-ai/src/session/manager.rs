//! SessionState struct and accessors.

use arti_common::SessionId;

use crate::persona::DEFAULT_INSTRUCTION;
use crate::remote::RemoteChat;
use crate::token_tracker::TokenTracker;
use crate::{TokenUsage, Turn};

use super::types::SessionStatus;

/// Everything one user's chat owns.
///
/// Invariant: when `handle` is `Some`, it was created with
/// `active_instruction`. The handle is never exposed.
pub struct SessionState {
    pub(super) id: SessionId,
    pub(super) active_instruction: String,
    pub(super) transcript: Vec<Turn>,
    pub(super) handle: Option<Box<dyn RemoteChat>>,
    /// Number of remote sessions bound so far.
    pub(super) generation: u64,
    pub(super) tracker: TokenTracker,
}

impl SessionState {
    /// A fresh, uninitialized session whose first remote session will use
    /// `instruction`.
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            id: SessionId::new(),
            active_instruction: instruction.into(),
            transcript: Vec::new(),
            handle: None,
            generation: 0,
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn active_instruction(&self) -> &str {
        &self.active_instruction
    }

    /// Turns in display order.
    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn status(&self) -> SessionStatus {
        if self.handle.is_some() {
            SessionStatus::Active
        } else {
            SessionStatus::Uninitialized
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn usage(&self) -> &TokenUsage {
        self.tracker.total()
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_INSTRUCTION)
    }
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("id", &self.id)
            .field("active_instruction", &self.active_instruction)
            .field("turns", &self.transcript.len())
            .field("status", &self.status())
            .field("generation", &self.generation)
            .finish()
    }
}
