//! Response classification for the refresh-and-retry decision
//!
//! Two independent signals mean the bearer token is stale:
//! - HTTP 401
//! - a JSON body with top-level `"code": 503`, which the API returns for
//!   expired tokens even on an HTTP 200
//!
//! The two checks are independent. The body code is observed vendor
//! behaviour, not documented API.

use serde_json::Value;

/// Vendor body code signalling an expired or invalid token.
const TOKEN_INVALID_CODE: f64 = 503.0;

/// Outcome of a resource response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
    /// Success status and no token-rejection signal
    Ok,
    /// Token should be refreshed and the request retried once
    NeedsRefresh,
    /// Non-success status unrelated to the token
    Failed,
}

/// Classify a resource response by HTTP status and body.
pub fn classify(status: u16, body: &str) -> ResponseClass {
    if token_rejected(status, body) {
        ResponseClass::NeedsRefresh
    } else if (200..300).contains(&status) {
        ResponseClass::Ok
    } else {
        ResponseClass::Failed
    }
}

/// Whether the response signals a stale token.
///
/// A body that is not JSON falls back to the status check alone.
pub fn token_rejected(status: u16, body: &str) -> bool {
    if status == 401 {
        return true;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value.get("code").and_then(Value::as_f64) == Some(TOKEN_INVALID_CODE),
        Err(_) => false,
    }
}
