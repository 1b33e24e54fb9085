use crate::dto::user_dto::UserRequest;
use crate::dto::MessageResponse;
use crate::models::user::User;
use crate::repositories::UserRepository;
use crate::utils::errors::{not_found_error, AppError};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

const ENTITY: &str = "User";

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY))
    }

    pub async fn create(&self, request: UserRequest) -> Result<User, AppError> {
        request.validate()?;
        let password_hash = hash_password(request.password.as_deref())?;
        let user = self
            .repository
            .create(&request.name, &request.email, password_hash.as_deref())
            .await?;
        tracing::info!("👤 Usuario creado: {}", user.email);
        Ok(user)
    }

    pub async fn update(&self, id: i32, request: UserRequest) -> Result<User, AppError> {
        request.validate()?;
        let password_hash = hash_password(request.password.as_deref())?;
        self.repository
            .update(id, &request.name, &request.email, password_hash.as_deref())
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

// Hash de la contraseña si viene en el payload
fn hash_password(password: Option<&str>) -> Result<Option<String>, AppError> {
    password
        .map(|p| hash(p, DEFAULT_COST).map_err(|e| AppError::Hash(format!("Error hashing password: {}", e))))
        .transpose()
}
