use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing secret: {0}")]
    MissingSecret(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ArtiError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("gemini.model must not be empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: gemini.model must not be empty"
        );

        let err = ConfigError::MissingSecret("set GEMINI_API_KEY".into());
        assert_eq!(err.to_string(), "missing secret: set GEMINI_API_KEY");
    }

    #[test]
    fn arti_error_from_config() {
        let err: ArtiError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, ArtiError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn arti_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: ArtiError = io_err.into();
        assert!(matches!(err, ArtiError::Io(_)));
        assert!(err.to_string().contains("stdout closed"));
    }

    #[test]
    fn arti_error_text_variants() {
        assert_eq!(
            ArtiError::Ai("quota exceeded".into()).to_string(),
            "ai error: quota exceeded"
        );
        assert_eq!(ArtiError::Other("oops".into()).to_string(), "oops");
    }
}
