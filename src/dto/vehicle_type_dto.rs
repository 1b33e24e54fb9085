use serde::Deserialize;
use validator::Validate;

// Request para crear o renombrar un tipo de vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct VehicleTypeRequest {
    #[validate(length(min = 1, max = 50, message = "Name is required"))]
    pub name: String,
}
