use crate::dto::employee_dto::EmployeeRequest;
use crate::models::employee::Employee;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Employee>, AppError> {
        let result = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let result = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn create(&self, request: &EmployeeRequest) -> Result<Employee, AppError> {
        let result = sqlx::query_as::<_, Employee>(
            "INSERT INTO employees (name, phone, cpf, cnpj) VALUES ($1, $2, $3, $4) RETURNING *"
        )
        .bind(&request.name)
        .bind(&request.phone)
        .bind(&request.cpf)
        .bind(&request.cnpj)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn update(&self, id: i32, request: &EmployeeRequest) -> Result<Option<Employee>, AppError> {
        let result = sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = $1, phone = $2, cpf = $3, cnpj = $4
            WHERE id = $5
            RETURNING *
            "#
        )
        .bind(&request.name)
        .bind(&request.phone)
        .bind(&request.cpf)
        .bind(&request.cnpj)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
