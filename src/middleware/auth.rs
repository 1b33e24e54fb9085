//! Middleware de autenticación JWT
//!
//! Verifica el token `Bearer` emitido por `/api/auth/login` e inyecta el
//! usuario autenticado en las extensions de la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    state::AppState,
    utils::{
        errors::AppError,
        jwt::{extract_token_from_header, verify_token, JwtConfig},
    },
};

/// Usuario autenticado que se inyecta en las requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

/// Middleware de autenticación JWT
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("No token provided".to_string()))?;

    let token = extract_token_from_header(auth_header)
        .ok_or_else(|| AppError::Unauthorized("Invalid token".to_string()))?;

    let claims = verify_token(token, &JwtConfig::from(state.config.as_ref()))?;

    let user_id = claims
        .sub
        .parse::<i32>()
        .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        name: claims.name,
        email: claims.email,
    });

    Ok(next.run(request).await)
}
