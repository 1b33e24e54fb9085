use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::vehicle::VehicleStatus;
use crate::utils::validation::deserialize_optional_id;

// Request para crear o reemplazar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct VehicleRequest {
    #[validate(length(min = 1, max = 10, message = "Plate must have between 1 and 10 characters"))]
    pub plate: String,
    #[validate(range(min = 0, message = "Km must not be negative"))]
    pub km: Option<i32>,
    #[serde(default, alias = "vehicleTypeId", deserialize_with = "deserialize_optional_id")]
    pub vehicle_type_id: Option<i32>,
    #[validate(custom = "validate_vehicle_status")]
    pub status: Option<String>,
}

impl VehicleRequest {
    /// Estado a persistir; ausente cuenta como `Active`
    pub fn status_or_default(&self) -> &str {
        self.status.as_deref().unwrap_or(VehicleStatus::Active.as_str())
    }
}

fn validate_vehicle_status(status: &str) -> Result<(), ValidationError> {
    status
        .parse::<VehicleStatus>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_vehicle_status"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_request_validation() {
        let request: VehicleRequest =
            serde_json::from_str(r#"{"plate": "ABC1D23", "km": 1200, "vehicle_type_id": "2"}"#).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.vehicle_type_id, Some(2));
        assert_eq!(request.status_or_default(), "Active");

        let request: VehicleRequest =
            serde_json::from_str(r#"{"plate": "ABC1D23", "status": "Parked"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: VehicleRequest = serde_json::from_str(r#"{"plate": "", "km": -5}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("plate"));
        assert!(errors.field_errors().contains_key("km"));
    }

    #[test]
    fn test_plate_fits_column() {
        let request: VehicleRequest = serde_json::from_str(r#"{"plate": "ABCDEFGHIJ"}"#).unwrap();
        assert!(request.validate().is_ok());

        let request: VehicleRequest = serde_json::from_str(r#"{"plate": "ABCDEFGHIJKLMNO"}"#).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("plate"));
    }
}
