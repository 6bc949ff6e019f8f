//! Error types for token acquisition

/// Errors from the client-credentials token request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("token endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("no access token received in response")]
    NoToken,
}

/// Result alias for auth operations.
pub type Result<T> = std::result::Result<T, Error>;
