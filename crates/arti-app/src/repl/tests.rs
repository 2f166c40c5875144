//! End-to-end REPL runs against an in-memory provider.

use std::sync::{Arc, Mutex};

use arti_ai::{
    AiError, AiResponse, ChatProvider, PersonaCatalog, RemoteChat, Role, SessionState,
    TokenUsage, DEFAULT_INSTRUCTION,
};
use async_trait::async_trait;

use super::Repl;

/// Echoes messages back; the text "ping" fails as if the network dropped.
#[derive(Clone, Default)]
struct EchoProvider {
    created: Arc<Mutex<Vec<String>>>,
}

struct EchoChat {
    instruction: String,
}

#[async_trait]
impl ChatProvider for EchoProvider {
    async fn create_session(
        &self,
        system_instruction: &str,
    ) -> Result<Box<dyn RemoteChat>, AiError> {
        self.created
            .lock()
            .unwrap()
            .push(system_instruction.to_string());
        Ok(Box::new(EchoChat {
            instruction: system_instruction.to_string(),
        }))
    }
}

#[async_trait]
impl RemoteChat for EchoChat {
    fn system_instruction(&self) -> &str {
        &self.instruction
    }

    async fn send(&mut self, text: &str) -> Result<AiResponse, AiError> {
        if text == "ping" {
            return Err(AiError::RemoteUnavailable("network down".into()));
        }
        Ok(AiResponse {
            content: format!("echo: {text}"),
            usage: TokenUsage {
                input_tokens: 4,
                output_tokens: 2,
            },
        })
    }
}

async fn run(provider: &EchoProvider, input: &str) -> (String, Repl<EchoProvider>) {
    let mut repl = Repl::new(
        provider.clone(),
        PersonaCatalog::builtin(),
        SessionState::default(),
        "Arti AI",
    );
    let mut output = Vec::new();
    repl.run(input.as_bytes(), &mut output).await.unwrap();
    (String::from_utf8(output).unwrap(), repl)
}

#[tokio::test]
async fn message_round_trip_and_history() {
    let provider = EchoProvider::default();
    let (output, repl) = run(&provider, "hello\n/history\n/quit\n").await;

    assert!(output.contains("Chatting with Arti AI (Default Assistant)"));
    assert!(output.contains("🤖 **Arti AI:** echo: hello"));
    assert!(output.contains("🧑 hello\n🤖 **Arti AI:** echo: hello"));
    assert_eq!(repl.state().transcript().len(), 2);
    assert_eq!(*provider.created.lock().unwrap(), vec![DEFAULT_INSTRUCTION]);
}

#[tokio::test]
async fn switching_persona_resets_chat() {
    let provider = EchoProvider::default();
    let (output, repl) = run(&provider, "hello\n/persona 5\n/history\n").await;

    assert!(output.contains("💡 Switched to Hindi Persona 🇮🇳; chat reset."));
    assert!(output.contains("(no messages yet)"));
    assert!(repl.state().transcript().is_empty());
    let created = provider.created.lock().unwrap();
    assert_eq!(created.len(), 2);
    assert!(created[1].contains("primarily responds in Hindi"));
}

#[tokio::test]
async fn reselecting_same_persona_keeps_conversation() {
    let provider = EchoProvider::default();
    let (output, repl) = run(&provider, "hello\n/persona Default Assistant\n").await;

    assert!(output.contains("Instruction unchanged; conversation kept."));
    assert_eq!(repl.state().transcript().len(), 2);
    assert_eq!(provider.created.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn custom_instruction_and_show() {
    let provider = EchoProvider::default();
    let (output, repl) = run(&provider, "/system Respond only in French.\n/show\n/personas\n").await;

    assert!(output.contains("Switched to custom instruction; chat reset."));
    assert!(output.contains("System instruction: \"Respond only in French.\""));
    assert!(!output.contains(" *\n"));
    assert_eq!(repl.state().active_instruction(), "Respond only in French.");
}

#[tokio::test]
async fn multi_line_instruction_reaches_the_session_verbatim() {
    let provider = EchoProvider::default();
    let (_, repl) = run(&provider, "/system  Be brief.\\nUse lists. \n").await;

    let expected = " Be brief.\nUse lists. ";
    assert_eq!(repl.state().active_instruction(), expected);
    assert_eq!(provider.created.lock().unwrap().last().map(String::as_str), Some(expected));
}

#[tokio::test]
async fn failed_send_is_reported_and_kept_as_user_turn() {
    let provider = EchoProvider::default();
    let (output, repl) = run(&provider, "ping\n").await;

    assert!(output.contains("⚠️  remote unavailable: network down (send again to retry)"));
    let roles: Vec<Role> = repl.state().transcript().iter().map(|t| t.role).collect();
    assert_eq!(roles, vec![Role::User]);
}

#[tokio::test]
async fn display_name_is_cosmetic() {
    let provider = EchoProvider::default();
    let (output, repl) = run(&provider, "/name Priya\nhello\n/usage\n").await;

    assert!(output.contains("🤖 **Priya:** echo: hello"));
    assert!(output.contains("1 replies, 6 tokens (4 in / 2 out)"));
    assert_eq!(repl.state().active_instruction(), DEFAULT_INSTRUCTION);
}

#[tokio::test]
async fn unknown_input_is_explained() {
    let provider = EchoProvider::default();
    let (output, _) = run(&provider, "/reset\n/persona Klingon\n/name\n").await;

    assert!(output.contains("Unknown command /reset. Try /help."));
    assert!(output.contains("Unknown persona: Klingon. Try /personas."));
    assert!(output.contains("/name needs an argument."));
}
