use crate::dto::vehicle_type_dto::VehicleTypeRequest;
use crate::models::vehicle_type::VehicleType;
use crate::utils::errors::AppError;
use sqlx::PgPool;

const DUPLICATE_NAME: &str = "Vehicle Type already exists";

pub struct VehicleTypeRepository {
    pool: PgPool,
}

impl VehicleTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VehicleType>, AppError> {
        let result = sqlx::query_as::<_, VehicleType>("SELECT * FROM vehicles_types ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleType>, AppError> {
        let result = sqlx::query_as::<_, VehicleType>("SELECT * FROM vehicles_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn create(&self, request: &VehicleTypeRequest) -> Result<VehicleType, AppError> {
        sqlx::query_as::<_, VehicleType>("INSERT INTO vehicles_types (name) VALUES ($1) RETURNING *")
            .bind(&request.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from(e).on_unique_violation(DUPLICATE_NAME))
    }

    pub async fn update(&self, id: i32, request: &VehicleTypeRequest) -> Result<Option<VehicleType>, AppError> {
        sqlx::query_as::<_, VehicleType>("UPDATE vehicles_types SET name = $1 WHERE id = $2 RETURNING *")
            .bind(&request.name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from(e).on_unique_violation(DUPLICATE_NAME))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
