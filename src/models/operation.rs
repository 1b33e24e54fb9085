//! Modelo de Operation
//!
//! Una operación es un trabajo de flete: empresa cliente, vehículo,
//! conductor, ayudante opcional, valores monetarios y horario previsto.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado de la operación - columna `status` con check constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationStatus {
    Pending,
    Completed,
    Canceled,
}

impl OperationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationStatus::Pending => "Pending",
            OperationStatus::Completed => "Completed",
            OperationStatus::Canceled => "Canceled",
        }
    }
}

impl Default for OperationStatus {
    fn default() -> Self {
        OperationStatus::Pending
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OperationStatus::Pending),
            "Completed" => Ok(OperationStatus::Completed),
            "Canceled" => Ok(OperationStatus::Canceled),
            other => Err(format!("Invalid status '{}': expected Pending, Completed or Canceled", other)),
        }
    }
}

/// Operation - mapea a la tabla operations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Operation {
    pub id: i32,
    pub company_id: i32,
    pub vehicle_id: Option<i32>,
    pub driver_id: i32,
    pub support_id: Option<i32>,
    #[serde(with = "rust_decimal::serde::float")]
    pub operation_value: Decimal,
    pub operation_date: NaiveDateTime,
    #[serde(with = "rust_decimal::serde::float")]
    pub driver_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub support_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub toll: Decimal,
    pub estimated_time: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("Pending".parse::<OperationStatus>(), Ok(OperationStatus::Pending));
        assert_eq!("Canceled".parse::<OperationStatus>(), Ok(OperationStatus::Canceled));
        assert!("Cancelled".parse::<OperationStatus>().is_err());
        assert!("pending".parse::<OperationStatus>().is_err());
        assert_eq!(OperationStatus::default().to_string(), "Pending");
    }
}
