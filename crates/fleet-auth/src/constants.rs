//! Bolt OIDC constants
//!
//! Public endpoint and scope values. The client id and secret are supplied by
//! configuration, never compiled in.

/// Token endpoint for the client-credentials grant
pub const TOKEN_ENDPOINT: &str = "https://oidc.bolt.eu/token";

/// Scope granting read access to the Fleet Integration API
pub const SCOPE: &str = "fleet-integration:api";

/// OAuth grant type used for every token request
pub const GRANT_TYPE: &str = "client_credentials";
