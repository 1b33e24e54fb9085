use serde::Deserialize;
use validator::Validate;

// Request para crear o reemplazar un empleado
#[derive(Debug, Deserialize, Validate)]
pub struct EmployeeRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(length(max = 20, message = "Phone is too long"))]
    pub phone: Option<String>,
    #[validate(length(max = 14, message = "CPF is too long"))]
    pub cpf: Option<String>,
    #[validate(length(max = 20, message = "CNPJ is too long"))]
    pub cnpj: Option<String>,
}
