//! Configuration error types

use thiserror::Error;

/// Errors raised while resolving credentials and configuration.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result alias using common Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_includes_context() {
        let config_err = Error::Config("api_url must start with http".into());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: api_url must start with http"
        );

        let env_err = Error::MissingEnv("BOLT_CLIENT_ID");
        assert_eq!(
            env_err.to_string(),
            "missing environment variable: BOLT_CLIENT_ID"
        );

        let io_err = Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(
            io_err.to_string().starts_with("I/O error:"),
            "got: {}",
            io_err
        );
    }

    #[test]
    fn toml_errors_convert() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not valid {{{{ toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Toml(_)));
    }
}
