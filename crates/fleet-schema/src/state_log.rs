//! Fleet state log records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lenient;

/// A timestamped change in a driver/vehicle's operational state, with the
/// position where it happened. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetStateLog {
    /// Unix seconds
    #[serde(deserialize_with = "lenient::int")]
    pub created: i64,
    pub state: String,
    pub driver_uuid: Uuid,
    pub vehicle_uuid: Uuid,
    #[serde(deserialize_with = "lenient::float")]
    pub lat: f64,
    #[serde(deserialize_with = "lenient::float")]
    pub lng: f64,
}
