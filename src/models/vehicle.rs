//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su estado.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado del vehículo - columna `status` con check constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleStatus {
    Active,
    Driving,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Driving => "Driving",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }
}

impl FromStr for VehicleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(VehicleStatus::Active),
            "Driving" => Ok(VehicleStatus::Driving),
            "Maintenance" => Ok(VehicleStatus::Maintenance),
            other => Err(format!("Invalid vehicle status '{}': expected Active, Driving or Maintenance", other)),
        }
    }
}

/// Vehicle - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub plate: String,
    pub km: Option<i32>,
    pub vehicle_type_id: Option<i32>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_status_parsing() {
        assert_eq!("Driving".parse::<VehicleStatus>(), Ok(VehicleStatus::Driving));
        assert_eq!(VehicleStatus::Maintenance.as_str(), "Maintenance");
        assert!("Retired".parse::<VehicleStatus>().is_err());
    }
}
