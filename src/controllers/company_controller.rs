use crate::dto::company_dto::CompanyRequest;
use crate::dto::MessageResponse;
use crate::models::company::Company;
use crate::repositories::CompanyRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;
use validator::Validate;

const ENTITY: &str = "Company";

pub struct CompanyController {
    repository: CompanyRepository,
}

impl CompanyController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CompanyRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Company>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Company, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY))
    }

    pub async fn create(&self, request: CompanyRequest) -> Result<Company, AppError> {
        request.validate()?;
        let company = self.repository.create(&request).await?;
        tracing::info!("🏢 Empresa creada: {} ({})", company.name, company.id);
        Ok(company)
    }

    pub async fn update(&self, id: i32, request: CompanyRequest) -> Result<Company, AppError> {
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
