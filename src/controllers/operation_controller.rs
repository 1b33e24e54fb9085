use crate::dto::operation_dto::{CreateOperationRequest, OperationPatch};
use crate::dto::MessageResponse;
use crate::models::operation::Operation;
use crate::repositories::OperationRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::PgPool;

const ENTITY: &str = "Operation";

pub struct OperationController {
    repository: OperationRepository,
}

impl OperationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OperationRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Operation>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Operation, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY))
    }

    pub async fn create(&self, request: CreateOperationRequest) -> Result<Operation, AppError> {
        request.validate()?;
        let status = request.status()?;
        let operation = self.repository.create(&request, status).await?;
        tracing::info!(
            "📦 Operación {} creada para empresa {} el {}",
            operation.id,
            operation.company_id,
            operation.operation_date
        );
        Ok(operation)
    }

    /// PUT y PATCH: solo se escriben las columnas presentes
    pub async fn update(&self, id: i32, patch: OperationPatch) -> Result<Operation, AppError> {
        patch.validate()?;
        if patch.is_empty() {
            tracing::debug!("Patch vacío para operación {}", id);
        }
        self.repository
            .update_partial(id, &patch)
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
