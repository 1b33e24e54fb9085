use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::calendar::OperationStore;
use crate::dto::operation_dto::{ColumnValue, CreateOperationRequest, OperationPatch};
use crate::models::operation::{Operation, OperationStatus};
use crate::utils::errors::{not_found_error, AppError};

#[derive(Clone)]
pub struct OperationRepository {
    pool: PgPool,
}

impl OperationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Operation>, AppError> {
        let result = sqlx::query_as::<_, Operation>("SELECT * FROM operations ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    /// Operaciones con inicio en `[start, end)`
    pub async fn list_in_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<Operation>, AppError> {
        let result = sqlx::query_as::<_, Operation>(
            r#"
            SELECT * FROM operations
            WHERE operation_date >= $1 AND operation_date < $2
            ORDER BY operation_date ASC, id ASC
            "#
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Operation>, AppError> {
        let result = sqlx::query_as::<_, Operation>("SELECT * FROM operations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn create(&self, request: &CreateOperationRequest, status: OperationStatus) -> Result<Operation, AppError> {
        let result = sqlx::query_as::<_, Operation>(
            r#"
            INSERT INTO operations (
                company_id, vehicle_id, driver_id, support_id,
                operation_value, operation_date, driver_value, support_value,
                toll, estimated_time, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#
        )
        .bind(request.company_id)
        .bind(request.vehicle_id)
        .bind(request.driver_id)
        .bind(request.support_id)
        .bind(request.operation_value)
        .bind(request.operation_date)
        .bind(request.driver_value)
        .bind(request.support_value)
        .bind(request.toll)
        .bind(&request.estimated_time)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    /// UPDATE parcial: solo las columnas presentes en el patch.
    ///
    /// Un patch vacío devuelve la fila actual sin escribir.
    pub async fn update_partial(&self, id: i32, patch: &OperationPatch) -> Result<Option<Operation>, AppError> {
        let assignments = patch.assignments();
        if assignments.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE operations SET ");
        {
            let mut separated = builder.separated(", ");
            for assignment in assignments {
                separated.push(assignment.column);
                separated.push_unseparated(" = ");
                match assignment.value {
                    ColumnValue::Id(value) => separated.push_bind_unseparated(value),
                    ColumnValue::Money(value) => separated.push_bind_unseparated(value),
                    ColumnValue::Timestamp(value) => separated.push_bind_unseparated(value),
                    ColumnValue::Text(value) => separated.push_bind_unseparated(value),
                };
            }
        }
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING *");

        let result = builder
            .build_query_as::<Operation>()
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM operations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl OperationStore for OperationRepository {
    async fn list_operations(&self) -> Result<Vec<Operation>, AppError> {
        self.list_all().await
    }

    async fn patch_operation(&self, id: i32, patch: &OperationPatch) -> Result<Operation, AppError> {
        patch.validate()?;
        self.update_partial(id, patch)
            .await?
            .ok_or_else(|| not_found_error("Operation"))
    }
}
