//! Credentials and their providers
//!
//! The client never reads process configuration itself: a
//! `CredentialsProvider` is handed to `FleetClient::from_provider`.
//!
//! Client secret resolution for `FileCredentials`:
//! 1. BOLT_CLIENT_SECRET env var
//! 2. client_secret_file path from the TOML
//!
//! The secret is never stored in the TOML directly.

use std::path::{Path, PathBuf};

use common::Secret;
use fleet_auth::TOKEN_ENDPOINT;
use serde::Deserialize;

pub const ENV_CLIENT_ID: &str = "BOLT_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "BOLT_CLIENT_SECRET";
pub const ENV_API_URL: &str = "BOLT_API_URL";
pub const ENV_TOKEN_URL: &str = "BOLT_TOKEN_URL";

/// Everything a `FleetClient` needs to authenticate and reach the API.
/// Immutable once handed to a client.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: Secret<String>,
    /// Base URL the resource paths (e.g. `/getVehicles`) are appended to
    pub api_url: String,
    /// OIDC token endpoint, `TOKEN_ENDPOINT` unless overridden
    pub token_url: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<Secret<String>>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            api_url: api_url.into(),
            token_url: TOKEN_ENDPOINT.to_string(),
        }
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    /// Check URL schemes and strip a trailing `/` from `api_url`.
    pub fn validated(mut self) -> common::Result<Self> {
        for (name, url) in [("api_url", &self.api_url), ("token_url", &self.token_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(common::Error::Config(format!(
                    "{name} must start with http:// or https://, got: {url}"
                )));
            }
        }
        if self.client_id.is_empty() {
            return Err(common::Error::Config("client_id must not be empty".into()));
        }
        self.api_url = self.api_url.trim_end_matches('/').to_string();
        Ok(self)
    }
}

/// Source of client credentials, injected into the client constructor.
pub trait CredentialsProvider {
    fn credentials(&self) -> common::Result<Credentials>;
}

/// Credentials already in hand.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub Credentials);

impl CredentialsProvider for StaticCredentials {
    fn credentials(&self) -> common::Result<Credentials> {
        self.0.clone().validated()
    }
}

/// Reads BOLT_CLIENT_ID, BOLT_CLIENT_SECRET, BOLT_API_URL and the optional
/// BOLT_TOKEN_URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialsProvider for EnvCredentials {
    fn credentials(&self) -> common::Result<Credentials> {
        let client_id = required_env(ENV_CLIENT_ID)?;
        let client_secret = required_env(ENV_CLIENT_SECRET)?;
        let api_url = required_env(ENV_API_URL)?;

        let mut credentials = Credentials::new(client_id, client_secret, api_url);
        if let Ok(token_url) = std::env::var(ENV_TOKEN_URL) {
            credentials = credentials.with_token_url(token_url);
        }
        credentials.validated()
    }
}

fn required_env(key: &'static str) -> common::Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(common::Error::MissingEnv(key)),
    }
}

/// TOML file layout read by `FileCredentials`.
#[derive(Debug, Deserialize)]
struct FileConfig {
    bolt: BoltSection,
}

#[derive(Debug, Deserialize)]
struct BoltSection {
    client_id: String,
    api_url: String,
    #[serde(default)]
    token_url: Option<String>,
    /// Path to a file containing the client secret (alternative to the
    /// BOLT_CLIENT_SECRET env var)
    #[serde(default)]
    client_secret_file: Option<PathBuf>,
}

/// Credentials from a TOML file with a `[bolt]` table.
#[derive(Debug, Clone)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialsProvider for FileCredentials {
    fn credentials(&self) -> common::Result<Credentials> {
        let contents = std::fs::read_to_string(&self.path)?;
        let config: FileConfig = toml::from_str(&contents)?;
        let section = config.bolt;

        let secret = if let Ok(secret) = std::env::var(ENV_CLIENT_SECRET) {
            secret
        } else if let Some(ref secret_file) = section.client_secret_file {
            let secret = std::fs::read_to_string(secret_file).map_err(|e| {
                common::Error::Config(format!(
                    "failed to read client_secret_file {}: {e}",
                    secret_file.display()
                ))
            })?;
            secret.trim().to_owned()
        } else {
            return Err(common::Error::Config(format!(
                "no client secret: set {ENV_CLIENT_SECRET} or client_secret_file"
            )));
        };

        if secret.is_empty() {
            return Err(common::Error::Config("client secret is empty".into()));
        }

        let mut credentials = Credentials::new(section.client_id, secret, section.api_url);
        if let Some(token_url) = section.token_url {
            credentials = credentials.with_token_url(token_url);
        }
        credentials.validated()
    }
}
