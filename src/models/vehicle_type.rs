use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// VehicleType - mapea a la tabla vehicles_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleType {
    pub id: i32,
    pub name: String,
}
