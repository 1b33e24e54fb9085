//! Modelo de Employee
//!
//! Conductores y ayudantes que se asignan a las operaciones.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employee - mapea a la tabla employees
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub phone: Option<String>,
    pub cpf: Option<String>,
    pub cnpj: Option<String>,
}
