//! Modelo de User
//!
//! Usuarios del back office. El hash de la contraseña nunca se serializa.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// User - mapea a la tabla users
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub created_at: Option<NaiveDateTime>,
}
