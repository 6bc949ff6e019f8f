//! Error types for API client operations

use fleet_schema::ValidationError;

/// Errors from `FleetClient` operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Token request failed or returned no token. Not retried.
    #[error("authentication failed: {0}")]
    Auth(#[from] fleet_auth::Error),

    /// Resource request failed after the single permitted retry.
    #[error("{endpoint} returned {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: u16,
        body: String,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error(transparent)]
    Config(#[from] common::Error),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
