//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: &'static str,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            error: error.to_string(),
            message: message.into(),
            details: None,
            code,
        }
    }
}

impl AppError {
    /// Código HTTP asociado al error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(e) => match constraint_violation(e) {
                Some(ConstraintViolation::Unique) => StatusCode::CONFLICT,
                Some(ConstraintViolation::ForeignKey) | Some(ConstraintViolation::NotNull) | Some(ConstraintViolation::Check) => {
                    StatusCode::BAD_REQUEST
                }
                None => StatusCode::INTERNAL_SERVER_ERROR,
            },
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) | AppError::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convierte una violación de unicidad en un `Conflict` con mensaje propio
    pub fn on_unique_violation(self, message: &str) -> Self {
        match &self {
            AppError::Database(e) if constraint_violation(e) == Some(ConstraintViolation::Unique) => {
                AppError::Conflict(message.to_string())
            }
            _ => self,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConstraintViolation {
    Unique,
    ForeignKey,
    NotNull,
    Check,
}

fn constraint_violation(error: &sqlx::Error) -> Option<ConstraintViolation> {
    let db_error = error.as_database_error()?;
    match db_error.code().as_deref() {
        Some("23505") => Some(ConstraintViolation::Unique),
        Some("23503") => Some(ConstraintViolation::ForeignKey),
        Some("23502") => Some(ConstraintViolation::NotNull),
        Some("23514") => Some(ConstraintViolation::Check),
        _ => None,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Database(e) => match constraint_violation(&e) {
                Some(ConstraintViolation::Unique) => {
                    tracing::warn!("Unique violation: {}", e);
                    ErrorResponse::new("Conflict", "Resource already exists", "CONFLICT")
                }
                Some(_) => {
                    tracing::warn!("Constraint violation: {}", e);
                    ErrorResponse::new(
                        "Bad Request",
                        "The provided data violates a database constraint",
                        "CONSTRAINT_VIOLATION",
                    )
                }
                None => {
                    tracing::error!("Database error: {}", e);
                    ErrorResponse::new("Database Error", "Server Error", "DB_ERROR")
                }
            },

            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                let mut response =
                    ErrorResponse::new("Validation Error", "The provided data is invalid", "VALIDATION_ERROR");
                response.details = serde_json::to_value(&e).ok();
                response
            }

            AppError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized access: {}", msg);
                ErrorResponse::new("Unauthorized", msg, "UNAUTHORIZED")
            }

            AppError::NotFound(msg) => {
                tracing::debug!("Resource not found: {}", msg);
                ErrorResponse::new("Not Found", msg, "NOT_FOUND")
            }

            AppError::Conflict(msg) => {
                tracing::warn!("Conflict: {}", msg);
                ErrorResponse::new("Conflict", msg, "CONFLICT")
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                ErrorResponse::new("Bad Request", msg, "BAD_REQUEST")
            }

            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ErrorResponse::new("Internal Server Error", "Server Error", "INTERNAL_ERROR")
            }

            AppError::Jwt(msg) => {
                tracing::warn!("JWT error: {}", msg);
                ErrorResponse::new("Unauthorized", "Invalid token", "JWT_ERROR")
            }

            AppError::Hash(msg) => {
                tracing::error!("Hash error: {}", msg);
                ErrorResponse::new("Internal Server Error", "Server Error", "HASH_ERROR")
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str) -> AppError {
    AppError::NotFound(format!("{} not found", resource))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
