//! Interactive line-based chat loop.
//!
//! Owns the user's `SessionState` and turns persona picks, instruction
//! edits and messages into session operations.

mod command;
mod render;

#[cfg(test)]
mod tests;

use arti_ai::{ChatProvider, InstructionChange, PersonaCatalog, SessionState};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub use command::{parse, Command, HELP};

const PROMPT: &str = "› ";

pub struct Repl<P> {
    provider: P,
    catalog: PersonaCatalog,
    state: SessionState,
    assistant_name: String,
}

impl<P: ChatProvider> Repl<P> {
    pub fn new(
        provider: P,
        catalog: PersonaCatalog,
        state: SessionState,
        assistant_name: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            catalog,
            state,
            assistant_name: assistant_name.into(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Bind the first remote session, then read lines until EOF or `/quit`.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(session = %self.state.id().short(), "chat started");
        let banner = format!(
            "💬 Chatting with {} ({}). Type /help for commands.",
            self.assistant_name,
            self.persona_label()
        );
        write_line(&mut output, &banner).await?;

        let instruction = self.state.active_instruction().to_string();
        if let Err(e) = self.state.set_instruction(&self.provider, instruction).await {
            write_line(&mut output, &format!("⚠️  {e}")).await?;
        }

        let mut lines = input.lines();
        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if !self.handle(parse(&line), &mut output).await? {
                break;
            }
        }

        info!(
            session = %self.state.id().short(),
            turns = self.state.transcript().len(),
            "chat ended"
        );
        Ok(())
    }

    /// Execute one command. Returns `false` when the loop should stop.
    async fn handle<W>(&mut self, command: Command, output: &mut W) -> std::io::Result<bool>
    where
        W: AsyncWrite + Unpin,
    {
        debug!(?command, "repl command");
        match command {
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Say(text) => self.say(text, output).await?,
            Command::Personas => {
                let listing = render::render_personas(&self.catalog, self.state.active_instruction());
                write_line(output, &listing).await?;
            }
            Command::Persona(query) => match self.catalog.find(&query) {
                Some(persona) => {
                    let instruction = persona.instruction.clone();
                    let label = persona.name.clone();
                    self.change_instruction(instruction, &label, output).await?;
                }
                None => {
                    write_line(output, &format!("Unknown persona: {query}. Try /personas.")).await?
                }
            },
            Command::System(text) => {
                self.change_instruction(text, "custom instruction", output)
                    .await?
            }
            Command::Show => {
                let shown = format!("System instruction: {:?}", self.state.active_instruction());
                write_line(output, &shown).await?;
            }
            Command::Name(name) => {
                self.assistant_name = name;
                write_line(output, &format!("Assistant is now called {}.", self.assistant_name))
                    .await?;
            }
            Command::History => {
                let rendered =
                    render::render_transcript(self.state.transcript(), &self.assistant_name);
                write_line(output, &rendered).await?;
            }
            Command::Usage => {
                write_line(output, &render::render_usage(self.state.tracker())).await?
            }
            Command::Help => write_line(output, HELP).await?,
            Command::MissingArgument(name) => {
                write_line(output, &format!("/{name} needs an argument.")).await?
            }
            Command::Unknown(word) => {
                write_line(output, &format!("Unknown command /{word}. Try /help.")).await?
            }
        }
        Ok(true)
    }

    async fn say<W>(&mut self, text: String, output: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self.state.send_message(&self.provider, text).await {
            Ok(reply) => {
                let turn = arti_ai::Turn::assistant(reply);
                write_line(output, &render::render_turn(&turn, &self.assistant_name)).await
            }
            Err(e) => write_line(output, &format!("⚠️  {e} (send again to retry)")).await,
        }
    }

    async fn change_instruction<W>(
        &mut self,
        instruction: String,
        label: &str,
        output: &mut W,
    ) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let message = match self.state.set_instruction(&self.provider, instruction).await {
            Ok(InstructionChange::Unchanged) => "Instruction unchanged; conversation kept.".to_string(),
            Ok(InstructionChange::Bound) => format!("Session started with {label}."),
            Ok(InstructionChange::Reset) => format!("💡 Switched to {label}; chat reset."),
            Err(e) => format!("⚠️  Could not start a session for {label}: {e}"),
        };
        write_line(output, &message).await
    }

    fn persona_label(&self) -> String {
        self.catalog
            .matching_instruction(self.state.active_instruction())
            .map(|p| p.name.clone())
            .unwrap_or_else(|| "custom instruction".to_string())
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
