use crate::dto::vehicle_dto::VehicleRequest;
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn create(&self, request: &VehicleRequest) -> Result<Vehicle, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (plate, km, vehicle_type_id, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#
        )
        .bind(&request.plate)
        .bind(request.km)
        .bind(request.vehicle_type_id)
        .bind(request.status_or_default())
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, id: i32, request: &VehicleRequest) -> Result<Option<Vehicle>, AppError> {
        let result = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate = $1, km = $2, vehicle_type_id = $3, status = COALESCE($4, status)
            WHERE id = $5
            RETURNING *
            "#
        )
        .bind(&request.plate)
        .bind(request.km)
        .bind(request.vehicle_type_id)
        .bind(&request.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
