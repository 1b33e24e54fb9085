use crate::dto::vehicle_dto::VehicleRequest;
use crate::dto::MessageResponse;
use crate::models::vehicle::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

const ENTITY: &str = "Vehicle";

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Vehicle, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY))
    }

    pub async fn create(&self, request: VehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;
        let vehicle = self.repository.create(&request).await?;
        tracing::info!("🚗 Vehículo creado: {} ({})", vehicle.plate, vehicle.id);
        Ok(vehicle)
    }

    pub async fn update(&self, id: i32, request: VehicleRequest) -> Result<Vehicle, AppError> {
        request.validate()?;
        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error(ENTITY))
    }

    pub async fn delete(&self, id: i32) -> Result<MessageResponse, AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error(ENTITY));
        }
        Ok(MessageResponse::deleted(ENTITY))
    }
}
