//! Plain-text rendering of the transcript and session info.

use arti_ai::{PersonaCatalog, Role, TokenTracker, Turn};

const USER_AVATAR: &str = "🧑";
const ASSISTANT_AVATAR: &str = "🤖";

pub fn render_turn(turn: &Turn, assistant_name: &str) -> String {
    match turn.role {
        Role::User => format!("{USER_AVATAR} {}", turn.content),
        Role::Assistant => format!("{ASSISTANT_AVATAR} **{assistant_name}:** {}", turn.content),
    }
}

pub fn render_transcript(turns: &[Turn], assistant_name: &str) -> String {
    if turns.is_empty() {
        return "(no messages yet)".to_string();
    }
    turns
        .iter()
        .map(|turn| render_turn(turn, assistant_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered persona list; `*` marks the persona whose text is active.
pub fn render_personas(catalog: &PersonaCatalog, active_instruction: &str) -> String {
    catalog
        .iter()
        .enumerate()
        .map(|(i, persona)| {
            let marker = if persona.instruction == active_instruction {
                " *"
            } else {
                ""
            };
            format!("{:>3}. {}{marker}", i + 1, persona.name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_usage(tracker: &TokenTracker) -> String {
    let total = tracker.total();
    let summary = format!(
        "{} replies, {} tokens ({} in / {} out)",
        tracker.call_count(),
        tracker.total_tokens(),
        total.input_tokens,
        total.output_tokens
    );
    match tracker.last() {
        Some(last) => format!("{summary}; last reply {} tokens", last.total_tokens()),
        None => summary,
    }
}
