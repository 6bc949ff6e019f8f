//! Bolt OIDC client-credentials authentication
//!
//! Obtains bearer tokens for the Fleet Integration API. The token endpoint is
//! treated as an opaque authority: one form POST in, one `access_token` out.
//! Token storage and refresh decisions belong to the API client, not here.

pub mod constants;
pub mod error;
pub mod token;

pub use constants::*;
pub use error::{Error, Result};
pub use token::fetch_token;
