//! Session status and operation outcomes.

/// Whether a remote session is currently bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No remote session yet, or the last rebind failed.
    Uninitialized,
    /// A remote session bound to the active instruction.
    Active,
}

/// What `set_instruction` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionChange {
    /// Same text as the bound session; nothing happened.
    Unchanged,
    /// First binding for the current instruction; the transcript was empty.
    Bound,
    /// The instruction changed; transcript cleared, new session bound.
    Reset,
}
