use crate::dto::company_dto::CompanyRequest;
use crate::models::company::Company;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn create(&self, request: &CompanyRequest) -> Result<Company, AppError> {
        let result = sqlx::query_as::<_, Company>(
            "INSERT INTO companies (name, cnpj) VALUES ($1, $2) RETURNING *"
        )
        .bind(&request.name)
        .bind(&request.cnpj)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, id: i32, request: &CompanyRequest) -> Result<Option<Company>, AppError> {
        let result = sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $1, cnpj = $2 WHERE id = $3 RETURNING *"
        )
        .bind(&request.name)
        .bind(&request.cnpj)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// `true` si existía la fila
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
