use serde::Deserialize;
use validator::Validate;

// Request para crear o reemplazar un usuario
#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Email is invalid"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: Option<String>,
}
