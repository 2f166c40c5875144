use clap::Parser;

/// Chat with Gemini through switchable personas.
#[derive(Parser, Debug)]
#[command(name = "arti", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. debug, arti_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Start with this persona (name or 1-based index).
    #[arg(short = 'p', long)]
    pub persona: Option<String>,

    /// Start with this system instruction instead of a persona.
    #[arg(short = 's', long, conflicts_with = "persona")]
    pub system: Option<String>,

    /// Assistant display name.
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Gemini model override.
    #[arg(short = 'm', long)]
    pub model: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
