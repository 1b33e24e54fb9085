//! DTOs de Operation
//!
//! El cliente web envía las claves con su propia ortografía (`companyId`,
//! `VehicleId`, ...) y a veces los ids como texto; ambos formatos se aceptan.
//! Las claves desconocidas se ignoran.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::operation::{Operation, OperationStatus};
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::{
    deserialize_estimate, deserialize_id, deserialize_nullable_estimate, deserialize_nullable_id,
    deserialize_optional_id, deserialize_optional_wall_clock, deserialize_wall_clock,
};

/// Request para crear una operación
#[derive(Debug, Deserialize)]
pub struct CreateOperationRequest {
    #[serde(alias = "companyId", deserialize_with = "deserialize_id")]
    pub company_id: i32,
    #[serde(default, alias = "VehicleId", alias = "vehicleId", deserialize_with = "deserialize_optional_id")]
    pub vehicle_id: Option<i32>,
    #[serde(alias = "driverId", deserialize_with = "deserialize_id")]
    pub driver_id: i32,
    #[serde(default, alias = "supportId", deserialize_with = "deserialize_optional_id")]
    pub support_id: Option<i32>,
    #[serde(alias = "operationValue")]
    pub operation_value: Decimal,
    #[serde(alias = "operationDate", deserialize_with = "deserialize_wall_clock")]
    pub operation_date: NaiveDateTime,
    #[serde(alias = "driverValue")]
    pub driver_value: Decimal,
    #[serde(default, alias = "supportValue")]
    pub support_value: Decimal,
    #[serde(default)]
    pub toll: Decimal,
    #[serde(default, alias = "estimatedTime", deserialize_with = "deserialize_estimate")]
    pub estimated_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Largo máximo de `estimated_time` (VARCHAR(50))
pub const ESTIMATED_TIME_MAX_LEN: usize = 50;

impl CreateOperationRequest {
    /// Validar los valores que la base de datos restringe
    pub fn validate(&self) -> Result<(), AppError> {
        check_estimate(self.estimated_time.as_deref())?;
        self.status().map(|_| ())
    }

    /// Estado validado; ausente cuenta como `Pending`
    pub fn status(&self) -> Result<OperationStatus, AppError> {
        parse_status(self.status.as_deref())
            .map(Option::unwrap_or_default)
    }
}

/// Actualización parcial de una operación.
///
/// Solo se escriben las columnas presentes en el payload. En las columnas
/// que admiten NULL, `Some(None)` significa un `null` explícito.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OperationPatch {
    #[serde(default, alias = "companyId", deserialize_with = "deserialize_optional_id")]
    pub company_id: Option<i32>,
    #[serde(default, alias = "VehicleId", alias = "vehicleId", deserialize_with = "deserialize_nullable_id")]
    pub vehicle_id: Option<Option<i32>>,
    #[serde(default, alias = "driverId", deserialize_with = "deserialize_optional_id")]
    pub driver_id: Option<i32>,
    #[serde(default, alias = "supportId", deserialize_with = "deserialize_nullable_id")]
    pub support_id: Option<Option<i32>>,
    #[serde(default, alias = "operationValue")]
    pub operation_value: Option<Decimal>,
    #[serde(default, alias = "driverValue")]
    pub driver_value: Option<Decimal>,
    #[serde(default, alias = "supportValue")]
    pub support_value: Option<Decimal>,
    #[serde(default)]
    pub toll: Option<Decimal>,
    #[serde(default, alias = "operationDate", deserialize_with = "deserialize_optional_wall_clock")]
    pub operation_date: Option<NaiveDateTime>,
    #[serde(default, alias = "estimatedTime", deserialize_with = "deserialize_nullable_estimate")]
    pub estimated_time: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Valor a escribir en una columna
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Id(Option<i32>),
    Money(Decimal),
    Timestamp(NaiveDateTime),
    Text(Option<String>),
}

/// Par columna/valor de un UPDATE parcial
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: &'static str,
    pub value: ColumnValue,
}

impl Assignment {
    fn new(column: &'static str, value: ColumnValue) -> Self {
        Self { column, value }
    }
}

impl OperationPatch {
    /// Patch que solo mueve la operación en el calendario
    pub fn reschedule(operation_date: Option<NaiveDateTime>, estimated_time: String) -> Self {
        Self {
            operation_date,
            estimated_time: Some(Some(estimated_time)),
            ..Self::default()
        }
    }

    /// Validar los valores que la base de datos restringe
    pub fn validate(&self) -> Result<(), AppError> {
        check_estimate(self.estimated_time.as_ref().and_then(Option::as_deref))?;
        parse_status(self.status.as_deref()).map(|_| ())
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// Columnas presentes en el payload, en orden estable
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut assignments = Vec::new();

        if let Some(id) = self.company_id {
            assignments.push(Assignment::new("company_id", ColumnValue::Id(Some(id))));
        }
        if let Some(id) = self.vehicle_id {
            assignments.push(Assignment::new("vehicle_id", ColumnValue::Id(id)));
        }
        if let Some(id) = self.driver_id {
            assignments.push(Assignment::new("driver_id", ColumnValue::Id(Some(id))));
        }
        if let Some(id) = self.support_id {
            assignments.push(Assignment::new("support_id", ColumnValue::Id(id)));
        }
        if let Some(value) = self.operation_value {
            assignments.push(Assignment::new("operation_value", ColumnValue::Money(value)));
        }
        if let Some(value) = self.driver_value {
            assignments.push(Assignment::new("driver_value", ColumnValue::Money(value)));
        }
        if let Some(value) = self.support_value {
            assignments.push(Assignment::new("support_value", ColumnValue::Money(value)));
        }
        if let Some(value) = self.toll {
            assignments.push(Assignment::new("toll", ColumnValue::Money(value)));
        }
        if let Some(date) = self.operation_date {
            assignments.push(Assignment::new("operation_date", ColumnValue::Timestamp(date)));
        }
        if let Some(estimate) = &self.estimated_time {
            assignments.push(Assignment::new("estimated_time", ColumnValue::Text(estimate.clone())));
        }
        if let Some(status) = &self.status {
            assignments.push(Assignment::new("status", ColumnValue::Text(Some(status.clone()))));
        }

        assignments
    }

    /// Aplicar el patch sobre una copia local (actualización optimista)
    pub fn apply_to(&self, operation: &mut Operation) {
        if let Some(id) = self.company_id {
            operation.company_id = id;
        }
        if let Some(id) = self.vehicle_id {
            operation.vehicle_id = id;
        }
        if let Some(id) = self.driver_id {
            operation.driver_id = id;
        }
        if let Some(id) = self.support_id {
            operation.support_id = id;
        }
        if let Some(value) = self.operation_value {
            operation.operation_value = value;
        }
        if let Some(value) = self.driver_value {
            operation.driver_value = value;
        }
        if let Some(value) = self.support_value {
            operation.support_value = value;
        }
        if let Some(value) = self.toll {
            operation.toll = value;
        }
        if let Some(date) = self.operation_date {
            operation.operation_date = date;
        }
        if let Some(estimate) = &self.estimated_time {
            operation.estimated_time = estimate.clone();
        }
        if let Some(status) = &self.status {
            operation.status = status.clone();
        }
    }
}

fn parse_status(status: Option<&str>) -> Result<Option<OperationStatus>, AppError> {
    status
        .map(|s| s.parse::<OperationStatus>().map_err(AppError::BadRequest))
        .transpose()
}

fn check_estimate(estimate: Option<&str>) -> Result<(), AppError> {
    match estimate {
        Some(value) if value.chars().count() > ESTIMATED_TIME_MAX_LEN => Err(bad_request_error(&format!(
            "estimated_time must have at most {} characters",
            ESTIMATED_TIME_MAX_LEN
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_operation() -> Operation {
        Operation {
            id: 1,
            company_id: 1,
            vehicle_id: Some(2),
            driver_id: 3,
            support_id: Some(4),
            operation_value: Decimal::new(100000, 2),
            operation_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(9, 0, 0).unwrap(),
            driver_value: Decimal::new(30000, 2),
            support_value: Decimal::new(10000, 2),
            toll: Decimal::ZERO,
            estimated_time: Some("2".to_string()),
            status: "Pending".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_create_accepts_client_spelling() {
        let request: CreateOperationRequest = serde_json::from_str(
            r#"{
                "companyId": "1", "VehicleId": 2, "driverId": 3, "supportId": "",
                "operation_value": 1500.5, "operation_date": "2024-01-08T09:00",
                "driver_value": "300", "estimated_time": "2"
            }"#,
        )
        .unwrap();

        assert_eq!(request.company_id, 1);
        assert_eq!(request.vehicle_id, Some(2));
        assert_eq!(request.support_id, None);
        assert_eq!(request.operation_value, Decimal::new(15005, 1));
        assert_eq!(request.driver_value, Decimal::new(300, 0));
        assert_eq!(request.support_value, Decimal::ZERO);
        assert_eq!(request.toll, Decimal::ZERO);
        assert_eq!(request.status().unwrap(), OperationStatus::Pending);
    }

    #[test]
    fn test_create_rejects_unknown_status() {
        let request: CreateOperationRequest = serde_json::from_str(
            r#"{
                "company_id": 1, "driver_id": 3, "operation_value": 10,
                "operation_date": "2024-01-08T09:00:00", "driver_value": 1, "status": "Done"
            }"#,
        )
        .unwrap();

        assert!(matches!(request.status(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_estimate_longer_than_column_is_rejected() {
        let long = "9".repeat(ESTIMATED_TIME_MAX_LEN + 10);

        let request: CreateOperationRequest = serde_json::from_value(serde_json::json!({
            "company_id": 1, "driver_id": 3, "operation_value": 10,
            "operation_date": "2024-01-08T09:00:00", "driver_value": 1,
            "estimated_time": long.clone(),
        }))
        .unwrap();
        assert!(matches!(request.validate(), Err(AppError::BadRequest(_))));

        let patch: OperationPatch = serde_json::from_value(serde_json::json!({ "estimatedTime": long })).unwrap();
        assert!(matches!(patch.validate(), Err(AppError::BadRequest(_))));

        let fits = "1".repeat(ESTIMATED_TIME_MAX_LEN);
        let patch: OperationPatch = serde_json::from_value(serde_json::json!({ "estimated_time": fits })).unwrap();
        assert!(patch.validate().is_ok());
        assert!(OperationPatch::default().validate().is_ok());
    }

    #[test]
    fn test_patch_ignores_unknown_keys() {
        let patch: OperationPatch = serde_json::from_str(r#"{"color": "red", "foo": 1}"#).unwrap();
        assert!(patch.is_empty());
        assert_eq!(patch, OperationPatch::default());
    }

    #[test]
    fn test_patch_distinguishes_null_from_absent() {
        let patch: OperationPatch = serde_json::from_str(r#"{"supportId": null, "toll": 12.5}"#).unwrap();
        let assignments = patch.assignments();

        assert_eq!(assignments.len(), 2);
        assert_eq!(assignments[0], Assignment::new("support_id", ColumnValue::Id(None)));
        assert_eq!(assignments[1], Assignment::new("toll", ColumnValue::Money(Decimal::new(125, 1))));
        assert_eq!(patch.vehicle_id, None);
    }

    #[test]
    fn test_patch_status_validation() {
        let patch: OperationPatch = serde_json::from_str(r#"{"status": "Completed"}"#).unwrap();
        assert!(patch.validate().is_ok());

        let patch: OperationPatch = serde_json::from_str(r#"{"status": "Archived"}"#).unwrap();
        assert!(matches!(patch.validate(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_apply_to_only_touches_present_fields() {
        let mut operation = sample_operation();
        let patch: OperationPatch =
            serde_json::from_str(r#"{"VehicleId": null, "estimated_time": 3, "status": "Canceled"}"#).unwrap();

        patch.apply_to(&mut operation);

        assert_eq!(operation.vehicle_id, None);
        assert_eq!(operation.support_id, Some(4));
        assert_eq!(operation.estimated_time.as_deref(), Some("3"));
        assert_eq!(operation.status, "Canceled");
        assert_eq!(operation.operation_value, Decimal::new(100000, 2));
    }

    #[test]
    fn test_reschedule_writes_date_and_estimate() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(10, 15, 0).unwrap();
        let patch = OperationPatch::reschedule(Some(start), "1.75".to_string());
        let columns: Vec<_> = patch.assignments().iter().map(|a| a.column).collect();
        assert_eq!(columns, vec!["operation_date", "estimated_time"]);

        let patch = OperationPatch::reschedule(None, "3".to_string());
        assert_eq!(patch.assignments().len(), 1);
    }
}
