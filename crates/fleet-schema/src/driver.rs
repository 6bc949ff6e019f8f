//! Driver records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PortalStatus, lenient};

/// A driver registered under a fleet partner. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub driver_uuid: Uuid,
    pub partner_uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub state: PortalStatus,
    #[serde(deserialize_with = "lenient::boolean")]
    pub has_cash_payment: bool,
}
