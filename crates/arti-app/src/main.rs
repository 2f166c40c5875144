mod cli;
mod repl;

use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

use arti_ai::{GeminiClient, GeminiConfig, Persona, PersonaCatalog, SessionState};
use arti_common::ArtiError;
use arti_config::{ArtiConfig, LogLevel};
use tracing_subscriber::EnvFilter;

/// Directive for this workspace's crates when `--log-level` is absent.
fn default_directive(level: LogLevel) -> String {
    let level = level.as_directive();
    format!("arti_app={level},arti_ai={level},arti_config={level}")
}

/// Start from `RUST_LOG` (or `warn`) and add `--log-level`, or the
/// configured level for the workspace crates, on top. Added directives
/// replace `RUST_LOG` entries for the same target. Unparseable directives
/// are returned so they can be reported once logging is up.
fn build_filter(
    rust_log: Option<&str>,
    cli_directive: Option<&str>,
    config_level: LogLevel,
) -> (EnvFilter, Vec<String>) {
    let base = rust_log
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("warn");
    let directives = cli_directive
        .map(str::to_string)
        .unwrap_or_else(|| default_directive(config_level));

    let mut filter = EnvFilter::builder().parse_lossy(base);
    let mut rejected = Vec::new();
    for directive in directives.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match directive.parse() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(_) => rejected.push(directive.to_string()),
        }
    }
    (filter, rejected)
}

fn init_logging(cli_directive: Option<&str>, config_level: LogLevel) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected) = build_filter(rust_log.as_deref(), cli_directive, config_level);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    for directive in rejected {
        tracing::warn!("ignoring invalid log directive '{directive}'");
    }
}

fn build_catalog(config: &ArtiConfig) -> PersonaCatalog {
    let custom = config
        .personas
        .iter()
        .map(|p| Persona::new(p.name.trim(), p.instruction.as_str()));
    let mut catalog = PersonaCatalog::builtin().with_custom(custom);
    if !catalog.set_default(&config.chat.default_persona) {
        tracing::warn!(
            "default persona '{}' not found, using '{}'",
            config.chat.default_persona,
            catalog.default_persona().name
        );
    }
    catalog
}

/// `--system` wins over `--persona`, which wins over the configured default.
fn initial_instruction(args: &cli::Args, catalog: &PersonaCatalog) -> arti_common::Result<String> {
    if let Some(ref text) = args.system {
        return Ok(text.clone());
    }
    match args.persona {
        Some(ref query) => catalog
            .find(query)
            .map(|p| p.instruction.clone())
            .ok_or_else(|| ArtiError::Other(format!("unknown persona: {query}"))),
        None => Ok(catalog.default_persona().instruction.clone()),
    }
}

fn build_client(args: &cli::Args, config: &ArtiConfig) -> arti_common::Result<GeminiClient> {
    let api_key = arti_config::resolve_api_key(&config.gemini.api_key_env)?;
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.gemini.model.clone());

    let mut gemini = GeminiConfig::new(api_key.expose())
        .with_model(model)
        .with_timeout(Duration::from_secs(config.gemini.timeout_secs.into()))
        .with_max_output_tokens(config.gemini.max_output_tokens)
        .with_temperature(config.gemini.temperature);
    if let Some(ref base_url) = config.gemini.base_url {
        gemini = gemini.with_base_url(base_url.as_str());
    }
    tracing::debug!(?gemini, "Gemini client configured");

    GeminiClient::new(gemini).map_err(|e| ArtiError::Ai(e.to_string()))
}

async fn run(args: cli::Args, config: ArtiConfig) -> arti_common::Result<()> {
    let catalog = build_catalog(&config);
    let instruction = initial_instruction(&args, &catalog)?;
    let client = build_client(&args, &config)?;
    let assistant_name = args
        .name
        .clone()
        .unwrap_or_else(|| config.chat.assistant_name.clone());

    let mut repl = repl::Repl::new(
        client,
        catalog,
        SessionState::new(instruction),
        assistant_name,
    );
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    repl.run(stdin, tokio::io::stdout()).await?;

    let usage = repl.state().usage();
    tracing::info!(
        input_tokens = usage.input_tokens,
        output_tokens = usage.output_tokens,
        "session usage"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Existing environment variables take precedence over .env entries.
    dotenv::dotenv().ok();

    let args = cli::parse();

    let loaded = arti_config::load_config(args.config.as_deref().map(Path::new));
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level)
        .unwrap_or_default();
    init_logging(args.log_level.as_deref(), level);

    tracing::info!("Arti v{} starting...", env!("CARGO_PKG_VERSION"));
    let config = match loaded {
        Ok(config) => {
            arti_config::validation::report(&config);
            config
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            ArtiConfig::default()
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("arti: {e}");
            ExitCode::FAILURE
        }
    }
}
