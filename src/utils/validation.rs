//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos en la frontera HTTP.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use crate::utils::errors::AppError;

/// Formatos de fecha-hora aceptados, todos interpretados como hora local de pared
const WALL_CLOCK_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parsear una fecha-hora sin conversión de zona horaria.
///
/// Si el valor trae un offset (RFC 3339), se conserva la hora de pared tal
/// cual viene escrita y se descarta el offset.
pub fn parse_wall_clock(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    WALL_CLOCK_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.naive_local()))
        .or_else(|| parse_date(value).and_then(|date| date.and_hms_opt(0, 0, 0)))
}

/// Parsear una fecha `YYYY-MM-DD`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Parámetro opcional de query: vacío o ausente cuenta como no provisto
pub fn optional_param(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parsear un parámetro de fecha opcional; un valor malformado es un 400
pub fn parse_optional_date(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    optional_param(value)
        .map(|raw| {
            parse_date(raw).ok_or_else(|| AppError::BadRequest(format!("{} must be a date in YYYY-MM-DD format", name)))
        })
        .transpose()
}

/// Parsear un identificador opcional; un valor malformado es un 400
pub fn parse_optional_id(name: &str, value: Option<&str>) -> Result<Option<i32>, AppError> {
    optional_param(value)
        .map(|raw| {
            raw.parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("{} must be an integer identifier", name)))
        })
        .transpose()
}

/// Deserializar una fecha-hora de pared obligatoria
pub fn deserialize_wall_clock<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wall_clock(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {}", raw)))
}

/// Deserializar una fecha-hora de pared opcional (ausente o `null` → `None`)
pub fn deserialize_optional_wall_clock<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_wall_clock(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time: {}", raw))),
        None => Ok(None),
    }
}

/// Identificador tal como lo envía el cliente: número o texto numérico
#[derive(Deserialize)]
#[serde(untagged)]
enum IdInput {
    Number(i64),
    Text(String),
}

impl IdInput {
    fn into_id<E: serde::de::Error>(self) -> Result<Option<i32>, E> {
        match self {
            IdInput::Number(n) => i32::try_from(n)
                .map(Some)
                .map_err(|_| E::custom(format!("identifier out of range: {}", n))),
            IdInput::Text(text) if text.trim().is_empty() => Ok(None),
            IdInput::Text(text) => text
                .trim()
                .parse::<i32>()
                .map(Some)
                .map_err(|_| E::custom(format!("invalid identifier: {}", text))),
        }
    }
}

/// Deserializar un identificador obligatorio (`3` o `"3"`)
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    IdInput::deserialize(deserializer)?
        .into_id()?
        .ok_or_else(|| serde::de::Error::custom("identifier is required"))
}

/// Deserializar un identificador opcional; `null` y `""` cuentan como ausentes
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdInput>::deserialize(deserializer)? {
        Some(input) => input.into_id(),
        None => Ok(None),
    }
}

/// Variante de `deserialize_optional_id` que distingue ausente de `null`
pub fn deserialize_nullable_id<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_id(deserializer).map(Some)
}

/// Duración estimada: texto libre (`"2"`, `"1.5h"`) o número de horas
#[derive(Deserialize)]
#[serde(untagged)]
enum EstimateInput {
    Hours(f64),
    Text(String),
}

fn estimate_text(input: Option<EstimateInput>) -> Option<String> {
    match input {
        Some(EstimateInput::Hours(hours)) => Some(hours.to_string()),
        Some(EstimateInput::Text(text)) if text.trim().is_empty() => None,
        Some(EstimateInput::Text(text)) => Some(text.trim().to_string()),
        None => None,
    }
}

/// Deserializar la duración estimada como texto
pub fn deserialize_estimate<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<EstimateInput>::deserialize(deserializer).map(estimate_text)
}

/// Variante de `deserialize_estimate` que distingue ausente de `null`
pub fn deserialize_nullable_estimate<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_estimate(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_wall_clock_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(9, 30, 0).unwrap();
        assert_eq!(parse_wall_clock("2024-01-08T09:30:00"), Some(expected));
        assert_eq!(parse_wall_clock("2024-01-08T09:30"), Some(expected));
        assert_eq!(parse_wall_clock("2024-01-08 09:30:00"), Some(expected));
        assert_eq!(parse_wall_clock("2024-01-08T09:30:00.000"), Some(expected));
    }

    #[test]
    fn test_parse_wall_clock_keeps_local_time_of_offsets() {
        let parsed = parse_wall_clock("2024-01-08T23:15:00-03:00").unwrap();
        assert_eq!(parsed.hour(), 23);
        assert_eq!(parsed.minute(), 15);
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
    }

    #[test]
    fn test_parse_wall_clock_rejects_garbage() {
        assert_eq!(parse_wall_clock("not a date"), None);
        assert_eq!(parse_wall_clock(""), None);
    }

    #[test]
    fn test_optional_params() {
        assert_eq!(parse_optional_date("startDate", None).unwrap(), None);
        assert_eq!(parse_optional_date("startDate", Some("  ")).unwrap(), None);
        assert_eq!(
            parse_optional_date("startDate", Some("2024-01-31")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31)
        );
        assert!(parse_optional_date("startDate", Some("31/01/2024")).is_err());

        assert_eq!(parse_optional_id("driverId", Some("")).unwrap(), None);
        assert_eq!(parse_optional_id("driverId", Some("5")).unwrap(), Some(5));
        assert!(parse_optional_id("driverId", Some("five")).is_err());
    }

    #[derive(Debug, Deserialize)]
    struct IdPayload {
        #[serde(deserialize_with = "deserialize_id")]
        company_id: i32,
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        vehicle_id: Option<i32>,
        #[serde(default, deserialize_with = "deserialize_nullable_id")]
        support_id: Option<Option<i32>>,
        #[serde(default, deserialize_with = "deserialize_estimate")]
        estimated_time: Option<String>,
    }

    #[test]
    fn test_lenient_ids() {
        let payload: IdPayload =
            serde_json::from_str(r#"{"company_id": "3", "vehicle_id": "", "support_id": null}"#).unwrap();
        assert_eq!(payload.company_id, 3);
        assert_eq!(payload.vehicle_id, None);
        assert_eq!(payload.support_id, Some(None));

        let payload: IdPayload = serde_json::from_str(r#"{"company_id": 4, "vehicle_id": 9}"#).unwrap();
        assert_eq!(payload.vehicle_id, Some(9));
        assert_eq!(payload.support_id, None);

        assert!(serde_json::from_str::<IdPayload>(r#"{"company_id": "abc"}"#).is_err());
        assert!(serde_json::from_str::<IdPayload>(r#"{"company_id": ""}"#).is_err());
    }

    #[test]
    fn test_estimate_accepts_numbers_and_text() {
        let payload: IdPayload = serde_json::from_str(r#"{"company_id": 1, "estimated_time": 2.5}"#).unwrap();
        assert_eq!(payload.estimated_time.as_deref(), Some("2.5"));

        let payload: IdPayload = serde_json::from_str(r#"{"company_id": 1, "estimated_time": " 1h "}"#).unwrap();
        assert_eq!(payload.estimated_time.as_deref(), Some("1h"));

        let payload: IdPayload = serde_json::from_str(r#"{"company_id": 1, "estimated_time": ""}"#).unwrap();
        assert_eq!(payload.estimated_time, None);
    }
}
