use crate::dto::employee_dto::EmployeeRequest;
use crate::dto::MessageResponse;
use crate::models::employee::Employee;
use crate::repositories::EmployeeRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

const ENTITY: &str = "Employee";

pub struct EmployeeController {
    repository: EmployeeRepository,
}

impl EmployeeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmployeeRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Employee, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY))
    }

    pub async fn create(&self, request: EmployeeRequest) -> Result<Employee, AppError> {
        request.validate()?;
        self.repository.create(&request).await
    }

    pub async fn update(&self, id: i32, request: EmployeeRequest) -> Result<Employee, AppError> {
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
