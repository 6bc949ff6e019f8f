//! Request bodies, endpoints and response envelope handling

use fleet_schema::PortalFilter;
use serde::Serialize;
use serde_json::Value;

/// Length of the default query window.
pub const DEFAULT_WINDOW_SECS: i64 = 24 * 60 * 60;

/// Orders are filtered by when their price was reviewed.
const ORDERS_TIME_RANGE_FILTER: &str = "price_review";

/// A resource endpoint and the list field inside its `data` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub list_field: &'static str,
}

pub const FLEET_ORDERS: Endpoint = Endpoint {
    path: "getFleetOrders",
    list_field: "orders",
};

pub const VEHICLES: Endpoint = Endpoint {
    path: "getVehicles",
    list_field: "vehicles",
};

pub const DRIVERS: Endpoint = Endpoint {
    path: "getDrivers",
    list_field: "drivers",
};

pub const FLEET_STATE_LOGS: Endpoint = Endpoint {
    path: "getFleetStateLogs",
    list_field: "state_logs",
};

/// Inclusive query window in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_ts: i64,
    pub end_ts: i64,
}

impl TimeWindow {
    /// Fill in missing bounds against `now`.
    ///
    /// Each bound defaults on its own: `end_ts` to `now`, `start_ts` to
    /// `now - 24h`. A supplied `end_ts` does not shift the default
    /// `start_ts`.
    pub fn resolve(start_ts: Option<i64>, end_ts: Option<i64>, now: i64) -> Self {
        Self {
            start_ts: start_ts.unwrap_or(now - DEFAULT_WINDOW_SECS),
            end_ts: end_ts.unwrap_or(now),
        }
    }
}

/// Current unix time in seconds.
pub fn now_unix() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Body for `/getFleetOrders`.
#[derive(Debug, Serialize)]
pub struct FleetOrdersQuery<'a> {
    pub offset: u32,
    pub limit: u32,
    pub company_ids: &'a [i64],
    pub start_ts: i64,
    pub end_ts: i64,
    pub time_range_filter_type: &'static str,
}

impl<'a> FleetOrdersQuery<'a> {
    pub fn new(offset: u32, limit: u32, company_ids: &'a [i64], window: TimeWindow) -> Self {
        Self {
            offset,
            limit,
            company_ids,
            start_ts: window.start_ts,
            end_ts: window.end_ts,
            time_range_filter_type: ORDERS_TIME_RANGE_FILTER,
        }
    }
}

/// Body for the single-company endpoints (vehicles, drivers, state logs).
/// `portal_status` is omitted for state logs.
#[derive(Debug, Serialize)]
pub struct CompanyQuery {
    pub offset: u32,
    pub limit: u32,
    pub company_id: i64,
    pub start_ts: i64,
    pub end_ts: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal_status: Option<PortalFilter>,
}

impl CompanyQuery {
    pub fn new(
        offset: u32,
        limit: u32,
        company_id: i64,
        portal_status: Option<PortalFilter>,
        window: TimeWindow,
    ) -> Self {
        Self {
            offset,
            limit,
            company_id,
            start_ts: window.start_ts,
            end_ts: window.end_ts,
            portal_status,
        }
    }
}

/// Pull `data.<list_field>` out of a successful response body.
///
/// Anything short of a JSON array at that position (non-JSON body, missing
/// or non-object `data`, missing or non-array list) is an empty result.
pub fn extract_items(body: &str, list_field: &str) -> Vec<Value> {
    let Ok(mut envelope) = serde_json::from_str::<Value>(body) else {
        return Vec::new();
    };
    match envelope
        .get_mut("data")
        .and_then(|data| data.get_mut(list_field))
        .map(Value::take)
    {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_schema::PortalStatus;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn window_defaults_to_last_day() {
        let window = TimeWindow::resolve(None, None, NOW);
        assert_eq!(window.end_ts, NOW);
        assert_eq!(window.start_ts, NOW - 86_400);
    }

    #[test]
    fn window_defaults_each_bound_against_now() {
        let end_only = TimeWindow::resolve(None, Some(NOW - 10 * 86_400), NOW);
        assert_eq!(end_only.start_ts, NOW - 86_400);
        assert_eq!(end_only.end_ts, NOW - 10 * 86_400);

        let start_only = TimeWindow::resolve(Some(NOW - 3_600), None, NOW);
        assert_eq!(start_only.start_ts, NOW - 3_600);
        assert_eq!(start_only.end_ts, NOW);
    }

    #[test]
    fn window_keeps_explicit_bounds() {
        let window = TimeWindow::resolve(Some(10), Some(20), NOW);
        assert_eq!(window, TimeWindow { start_ts: 10, end_ts: 20 });
    }

    #[test]
    fn orders_query_serializes_filter_type() {
        let ids = [101, 202];
        let query = FleetOrdersQuery::new(0, 50, &ids, TimeWindow::resolve(None, None, NOW));
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "offset": 0,
                "limit": 50,
                "company_ids": [101, 202],
                "start_ts": NOW - 86_400,
                "end_ts": NOW,
                "time_range_filter_type": "price_review"
            })
        );
    }

    #[test]
    fn company_query_includes_portal_status() {
        let query = CompanyQuery::new(
            5,
            10,
            77,
            Some(PortalStatus::Active.into()),
            TimeWindow { start_ts: 1, end_ts: 2 },
        );
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({
                "offset": 5,
                "limit": 10,
                "company_id": 77,
                "start_ts": 1,
                "end_ts": 2,
                "portal_status": "active"
            })
        );
    }

    #[test]
    fn company_query_omits_absent_portal_status() {
        let query = CompanyQuery::new(0, 10, 77, None, TimeWindow { start_ts: 1, end_ts: 2 });
        let value = serde_json::to_value(&query).unwrap();
        assert!(value.get("portal_status").is_none());
    }

    #[test]
    fn extract_items_reads_named_list() {
        let body = r#"{"data":{"vehicles":[{"id":1},{"id":2}],"total_rows":2}}"#;
        let items = extract_items(body, "vehicles");
        assert_eq!(items, vec![json!({"id":1}), json!({"id":2})]);
    }

    #[test]
    fn extract_items_is_lenient() {
        assert!(extract_items(r#"{"code":0}"#, "orders").is_empty());
        assert!(extract_items(r#"{"data":{}}"#, "orders").is_empty());
        assert!(extract_items(r#"{"data":null}"#, "orders").is_empty());
        assert!(extract_items(r#"{"data":{"orders":null}}"#, "orders").is_empty());
        assert!(extract_items("not json", "orders").is_empty());
    }

    #[test]
    fn endpoint_paths_and_fields() {
        assert_eq!(FLEET_ORDERS.path, "getFleetOrders");
        assert_eq!(FLEET_ORDERS.list_field, "orders");
        assert_eq!(VEHICLES.list_field, "vehicles");
        assert_eq!(DRIVERS.list_field, "drivers");
        assert_eq!(FLEET_STATE_LOGS.path, "getFleetStateLogs");
        assert_eq!(FLEET_STATE_LOGS.list_field, "state_logs");
    }
}
