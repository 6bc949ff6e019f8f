//! Portal status enumeration and request filter

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Activation state of a vehicle or driver in the fleet portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortalStatus {
    Active,
    Inactive,
}

impl PortalStatus {
    /// Wire value sent to and received from the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            PortalStatus::Active => "active",
            PortalStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for PortalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortalStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "active" => Ok(PortalStatus::Active),
            "inactive" => Ok(PortalStatus::Inactive),
            other => Err(format!("unknown portal status: {other}")),
        }
    }
}

/// Portal status as sent in a request filter.
///
/// Accepts the typed enum or a raw string and normalizes both to the wire
/// string at construction. Raw strings are forwarded as given, so callers can
/// pass values the API knows about before this crate does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PortalFilter(String);

impl PortalFilter {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PortalStatus> for PortalFilter {
    fn from(status: PortalStatus) -> Self {
        Self(status.as_str().to_owned())
    }
}

impl From<&str> for PortalFilter {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for PortalFilter {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}
