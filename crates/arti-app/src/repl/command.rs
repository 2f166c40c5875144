//! Parsing of REPL input lines.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Plain text to send to the model.
    Say(String),
    Personas,
    Persona(String),
    /// Free-text instruction override; may be empty.
    System(String),
    Show,
    Name(String),
    History,
    Usage,
    Help,
    Quit,
    Empty,
    MissingArgument(&'static str),
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  /personas          list personas
  /persona <name|n>  switch persona (resets the chat)
  /system <text>     set a custom system instruction (resets the chat);
                     kept as typed, \\n starts a new line
  /show              show the active system instruction
  /name <text>       change the assistant's display name
  /history           show the whole conversation
  /usage             show token usage
  /help              show this help
  /quit              exit
Anything else is sent as a message.";

/// Parse one input line. Messages and most arguments are trimmed; the
/// `/system` argument is kept verbatim after the separating space.
pub fn parse(line: &str) -> Command {
    let line = line
        .trim_start()
        .trim_end_matches(|c| c == '\r' || c == '\n');
    if line.trim().is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Say(line.trim_end().to_string());
    };

    let (word, raw_arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let arg = raw_arg.trim();

    match word {
        "personas" => Command::Personas,
        "persona" if arg.is_empty() => Command::MissingArgument("persona"),
        "persona" => Command::Persona(arg.to_string()),
        "system" => Command::System(raw_arg.replace("\\n", "\n")),
        "show" => Command::Show,
        "name" if arg.is_empty() => Command::MissingArgument("name"),
        "name" => Command::Name(arg.to_string()),
        "history" => Command::History,
        "usage" => Command::Usage,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}
