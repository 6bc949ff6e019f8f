//! Credential source selection
//!
//! Config precedence: --config CLI arg > CONFIG_PATH env var > ./fleet-cli.toml.
//! When no file was asked for and the default file is absent, credentials
//! come from BOLT_* environment variables instead.

use std::path::PathBuf;

use fleet_client::{Credentials, CredentialsProvider, EnvCredentials, FileCredentials};
use tracing::info;

const DEFAULT_CONFIG_FILE: &str = "fleet-cli.toml";

/// Resolve config file path from CLI arg or CONFIG_PATH env var.
pub fn resolve_path(cli_path: Option<&str>) -> PathBuf {
    if let Some(p) = cli_path {
        return PathBuf::from(p);
    }
    if let Ok(p) = std::env::var("CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Load credentials from the resolved config file, or from the environment
/// when only the (missing) default file applies.
pub fn load_credentials(cli_path: Option<&str>) -> common::Result<Credentials> {
    let explicit = cli_path.is_some() || std::env::var("CONFIG_PATH").is_ok();
    let path = resolve_path(cli_path);

    if explicit || path.exists() {
        let provider = FileCredentials::new(path);
        info!(path = %provider.path().display(), "loading credentials from file");
        provider.credentials()
    } else {
        info!("no config file, loading credentials from environment");
        EnvCredentials.credentials()
    }
}
