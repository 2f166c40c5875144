//! Conversation session management.
//!
//! A `SessionState` holds the active system instruction, the transcript,
//! and the remote chat handle, and keeps the handle bound to the active
//! instruction: changing the instruction discards both the handle and the
//! transcript.

mod chat;
mod manager;
mod types;


pub use manager::SessionState;
pub use types::{InstructionChange, SessionStatus};
