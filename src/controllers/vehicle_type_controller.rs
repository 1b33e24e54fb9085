use crate::dto::vehicle_type_dto::VehicleTypeRequest;
use crate::dto::MessageResponse;
use crate::models::vehicle_type::VehicleType;
use crate::repositories::VehicleTypeRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

const ENTITY: &str = "Vehicle Type";

pub struct VehicleTypeController {
    repository: VehicleTypeRepository,
}

impl VehicleTypeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleTypeRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<VehicleType>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<VehicleType, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY))
    }

    pub async fn create(&self, request: VehicleTypeRequest) -> Result<VehicleType, AppError> {
        request.validate()?;
        self.repository.create(&request).await
    }

    pub async fn update(&self, id: i32, request: VehicleTypeRequest) -> Result<VehicleType, AppError> {
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
