use serde::Deserialize;
use validator::Validate;

// Request para crear o reemplazar una empresa
#[derive(Debug, Deserialize, Validate)]
pub struct CompanyRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(length(max = 20, message = "CNPJ is too long"))]
    pub cnpj: Option<String>,
}
