//! Modelo de Company
//!
//! Empresas cliente a las que se prestan las operaciones.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Company - mapea a la tabla companies
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub cnpj: Option<String>,
}
