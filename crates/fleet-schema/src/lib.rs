//! Record schemas for the Bolt Fleet Integration API
//!
//! Read-only projections of API response items. Each record is built from a
//! single JSON object with `Record::from_value`, which fails with
//! `ValidationError` when a required field is missing or has the wrong type.
//! Records never own each other: an order's `driver_uuid` matching a
//! `Driver::driver_uuid` is a loose correlation for the caller to resolve.

pub mod driver;
pub mod error;
pub mod lenient;
pub mod order;
pub mod state_log;
pub mod status;
pub mod vehicle;

pub use driver::Driver;
pub use error::{Result, ValidationError};
pub use order::{FleetOrder, OrderPrice, OrderStop};
pub use state_log::FleetStateLog;
pub use status::{PortalFilter, PortalStatus};
pub use vehicle::Vehicle;

use serde::de::DeserializeOwned;

/// A typed API response item.
pub trait Record: DeserializeOwned {
    /// Record kind used in validation errors (e.g. "vehicle")
    const KIND: &'static str;

    /// Validate one response item and build the record from it.
    fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ValidationError::new(Self::KIND, e))
    }
}

impl Record for FleetOrder {
    const KIND: &'static str = "fleet order";
}

impl Record for Vehicle {
    const KIND: &'static str = "vehicle";
}

impl Record for Driver {
    const KIND: &'static str = "driver";
}

impl Record for FleetStateLog {
    const KIND: &'static str = "fleet state log";
}
