use crate::config::EnvironmentConfig;
use crate::dto::auth_dto::{AuthUser, LoginRequest, LoginResponse};
use crate::repositories::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use bcrypt::verify;
use sqlx::PgPool;
use validator::Validate;

const INVALID_CREDENTIALS: &str = "Invalid Credentials";

pub struct AuthController {
    repository: UserRepository,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, config: &EnvironmentConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt: JwtConfig::from(config),
        }
    }

    /// Login con email y contraseña. Email desconocido, usuario sin
    /// contraseña y contraseña errónea dan el mismo 400.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::BadRequest(INVALID_CREDENTIALS.to_string()))?;

        let password_hash = user
            .password
            .as_deref()
            .ok_or_else(|| AppError::BadRequest(INVALID_CREDENTIALS.to_string()))?;

        let valid = verify(&request.password, password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            tracing::warn!("🔒 Login fallido para {}", request.email);
            return Err(AppError::BadRequest(INVALID_CREDENTIALS.to_string()));
        }

        let token = generate_token(&user, &self.jwt)?;
        tracing::info!("🔑 Login exitoso: {}", user.email);

        Ok(LoginResponse {
            token,
            user: AuthUser {
                id: user.id,
                name: user.name,
                email: user.email,
            },
        })
    }
}
