//! Fleet order records
//!
//! Every field is optional: the API omits whatever it does not know about an
//! order (e.g. drop-off time for a ride still in progress).

use serde::{Deserialize, Serialize};

use crate::lenient;

/// One stop along an order's route, with the requested and the actual
/// position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderStop {
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub real_lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub real_lng: Option<f64>,
    #[serde(rename = "type")]
    pub stop_type: Option<String>,
}

/// Price breakdown of an order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrderPrice {
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub booking_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub cancellation_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub cash_discount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub net_earnings: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub tip: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub commission: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub in_app_discount: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub toll_fee: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub ride_price: Option<f64>,
}

/// A completed or in-progress ride.
///
/// Timestamps are unix seconds. `driver_uuid` and `partner_uuid` are kept as
/// strings since the orders endpoint does not guarantee UUID-shaped values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FleetOrder {
    pub order_reference: Option<String>,
    pub driver_name: Option<String>,
    pub payment_method: Option<String>,
    pub driver_uuid: Option<String>,
    pub driver_phone: Option<String>,
    pub partner_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub payment_confirmed_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub order_created_timestamp: Option<i64>,
    pub order_status: Option<String>,
    pub vehicle_model: Option<String>,
    pub vehicle_license_plate: Option<String>,
    pub price_review_reason: Option<String>,
    pub pickup_address: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_float")]
    pub ride_distance: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub order_accepted_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub order_pickup_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub order_drop_off_timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub order_finished_timestamp: Option<i64>,
    pub order_stops: Option<Vec<OrderStop>>,
    pub order_price: Option<OrderPrice>,
}
