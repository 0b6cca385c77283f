use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HeraldError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("network error: {0}")]
    Network(String),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("context error: {0}")]
    Context(String),

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

        let err = ConfigError::ValidationError("news.count = 42 is out of range [3, 10]".into());
        assert_eq!(
            err.to_string(),
            "config validation error: news.count = 42 is out of range [3, 10]"
        );
    }

    #[test]
    fn herald_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: HeraldError = config_err.into();
        assert!(matches!(err, HeraldError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn herald_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HeraldError = io_err.into();
        assert!(matches!(err, HeraldError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn herald_error_other_variants() {
        let err = HeraldError::Network("timeout".into());
        assert_eq!(err.to_string(), "network error: timeout");

        let err = HeraldError::Ai("model unavailable".into());
        assert_eq!(err.to_string(), "ai error: model unavailable");

        let err = HeraldError::Context("no headlines".into());
        assert_eq!(err.to_string(), "context error: no headlines");

        let err = HeraldError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
