//! Client-credentials token request
//!
//! POSTs the configured client id and secret to the OIDC token endpoint and
//! extracts `access_token` from the JSON response. No expiry bookkeeping: the
//! API client discovers stale tokens from resource responses and calls back
//! in here for a replacement.

use common::Secret;
use serde::Deserialize;
use tracing::{error, info};

use crate::constants::{GRANT_TYPE, SCOPE};
use crate::error::{Error, Result};

/// Token endpoint response. Only `access_token` is consumed; `expires_in`
/// and `token_type` are ignored.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Request a new access token with the client-credentials grant.
///
/// `token_url` is normally `TOKEN_ENDPOINT`. Non-success statuses map to
/// `Error::Rejected`; a success body without a usable `access_token` maps to
/// `Error::NoToken`. Never retried here.
pub async fn fetch_token(
    client: &reqwest::Client,
    token_url: &str,
    client_id: &str,
    client_secret: &Secret<String>,
) -> Result<String> {
    info!(token_url, "requesting new access token");

    let response = client
        .post(token_url)
        .form(&[
            ("client_id", client_id),
            ("client_secret", client_secret.expose().as_str()),
            ("grant_type", GRANT_TYPE),
            ("scope", SCOPE),
        ])
        .send()
        .await
        .map_err(|e| Error::Http(format!("token request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("<no body>"));

    if !status.is_success() {
        error!(status = status.as_u16(), "failed to get access token");
        return Err(Error::Rejected {
            status: status.as_u16(),
            body,
        });
    }

    let token = serde_json::from_str::<TokenResponse>(&body)
        .ok()
        .and_then(|parsed| parsed.access_token)
        .filter(|token| !token.is_empty())
        .ok_or(Error::NoToken)?;

    info!("obtained access token");
    Ok(token)
}
