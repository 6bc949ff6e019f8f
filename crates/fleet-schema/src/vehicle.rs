//! Vehicle records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PortalStatus, lenient};

/// A vehicle registered to a fleet company. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i64,
    pub model: String,
    #[serde(deserialize_with = "lenient::int")]
    pub year: i32,
    pub reg_number: String,
    pub uuid: Uuid,
    pub state: PortalStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use serde_json::json;

    fn vehicle_json() -> serde_json::Value {
        json!({
            "id": 4211,
            "model": "Toyota Prius",
            "year": 2019,
            "reg_number": "123ABC",
            "uuid": "6f1c2a7e-52a4-4a8e-9d0b-2e5a1c9b7f30",
            "state": "active"
        })
    }

    #[test]
    fn full_vehicle_round_trips() {
        let input = vehicle_json();
        let vehicle = Vehicle::from_value(input.clone()).unwrap();
        assert_eq!(vehicle.id, 4211);
        assert_eq!(vehicle.model, "Toyota Prius");
        assert_eq!(vehicle.year, 2019);
        assert_eq!(vehicle.state, PortalStatus::Active);
        assert_eq!(serde_json::to_value(&vehicle).unwrap(), input);
    }

    #[test]
    fn missing_model_is_rejected() {
        let mut input = vehicle_json();
        input.as_object_mut().unwrap().remove("model");
        let err = Vehicle::from_value(input).unwrap_err();
        assert_eq!(err.record, "vehicle");
        assert!(err.message.contains("model"), "got: {}", err.message);
    }

    #[test]
    fn numeric_strings_and_integral_floats_are_coerced() {
        let mut input = vehicle_json();
        input["id"] = json!("4211");
        input["year"] = json!("2019");
        let vehicle = Vehicle::from_value(input).unwrap();
        assert_eq!(vehicle.id, 4211);
        assert_eq!(vehicle.year, 2019);

        let mut input = vehicle_json();
        input["year"] = json!(2019.0);
        assert_eq!(Vehicle::from_value(input).unwrap().year, 2019);
    }

    #[test]
    fn fractional_year_is_rejected() {
        let mut input = vehicle_json();
        input["year"] = json!(2019.5);
        assert!(Vehicle::from_value(input).is_err());
    }

    #[test]
    fn non_uuid_string_is_rejected() {
        let mut input = vehicle_json();
        input["uuid"] = json!("vehicle-42");
        assert!(Vehicle::from_value(input).is_err());
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let mut input = vehicle_json();
        input["year"] = json!("twenty nineteen");
        assert!(Vehicle::from_value(input).is_err());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut input = vehicle_json();
        input["color"] = json!("white");
        assert!(Vehicle::from_value(input).is_ok());
    }
}
