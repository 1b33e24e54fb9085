//! DTOs de la API
//!
//! Payloads de request y response que cruzan la frontera HTTP.

pub mod auth_dto;
pub mod calendar_dto;
pub mod company_dto;
pub mod dashboard_dto;
pub mod employee_dto;
pub mod operation_dto;
pub mod user_dto;
pub mod vehicle_dto;
pub mod vehicle_type_dto;

use serde::Serialize;

/// Respuesta con un único mensaje, p. ej. tras un DELETE
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// `"<Entity> deleted successfully"`
    pub fn deleted(entity: &str) -> Self {
        Self::new(format!("{} deleted successfully", entity))
    }
}
