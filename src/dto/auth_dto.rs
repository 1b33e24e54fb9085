use serde::{Deserialize, Serialize};
use validator::Validate;

// Request de login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// Usuario público incluido en la respuesta de login
#[derive(Debug, Serialize)]
pub struct AuthUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}
