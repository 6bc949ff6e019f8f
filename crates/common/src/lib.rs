//! Shared types for the fleet integration workspace
//!
//! Holds the redacting `Secret` wrapper used for client secrets and bearer
//! tokens, and the configuration error type shared by the client library and
//! the CLI.

mod error;
mod secret;

pub use error::{Error, Result};
pub use secret::Secret;
