//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use arti_common::ConfigError;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_arti_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[gemini]
model = "gemini-2.5-pro"
temperature = 0.2

[chat]
assistant_name = "Priya"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gemini.model, "gemini-2.5-pro");
    assert_eq!(config.gemini.temperature, Some(0.2));
    assert_eq!(config.chat.assistant_name, "Priya");
    // Defaults preserved
    assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
    assert_eq!(config.chat.default_persona, "Default Assistant");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn invalid_values_are_kept_and_reported_as_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[gemini]\ntimeout_secs = 0\ntemperature = 9.0\n").unwrap();

    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let (config, valid) = tracing::subscriber::with_default(subscriber, || {
        let config = load_from_path(&path).unwrap();
        let valid = crate::validation::report(&config);
        (config, valid)
    });

    assert!(!valid);
    assert_eq!(config.gemini.timeout_secs, 0);
    assert_eq!(config.gemini.temperature, Some(9.0));
    let output = logs.contents();
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("gemini.timeout_secs = 0"), "{output}");
    assert!(output.contains("continuing with parsed values"), "{output}");
}

#[test]
fn load_or_create_writes_template_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arti").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.chat.assistant_name, "Arti AI");

    // Edits survive a second load.
    std::fs::write(&path, "[chat]\nassistant_name = \"Edited\"\n").unwrap();
    let config = load_or_create(&path).unwrap();
    assert_eq!(config.chat.assistant_name, "Edited");
}

#[test]
fn template_parses_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    create_default_config(&path).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert_eq!(config.gemini.timeout_secs, 120);
    assert!(config.personas.is_empty());
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_ends_with_arti_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("arti/config.toml"));
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
