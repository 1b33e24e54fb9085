use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::calendar::{CalendarConfig, EventLayout, ResizeDirection, WeekWindow};
use crate::utils::errors::AppError;
use crate::utils::validation::{optional_param, parse_optional_date};

/// Query de la vista semanal: `?date=YYYY-MM-DD&vehicleIds=1,2`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekQuery {
    pub date: Option<String>,
    pub vehicle_ids: Option<String>,
}

impl WeekQuery {
    pub fn reference_date(&self) -> Result<Option<NaiveDate>, AppError> {
        parse_optional_date("date", self.date.as_deref())
    }

    /// Ids seleccionados; `None` significa "todos los vehículos"
    pub fn selected_vehicles(&self) -> Result<Option<Vec<i32>>, AppError> {
        optional_param(self.vehicle_ids.as_deref())
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(|id| {
                        id.parse::<i32>()
                            .map_err(|_| AppError::BadRequest(format!("vehicleIds contains an invalid id: {}", id)))
                    })
                    .collect()
            })
            .transpose()
    }
}

/// Semana con los bloques posicionados
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekResponse {
    pub week: WeekWindow,
    pub days: Vec<NaiveDate>,
    pub grid: CalendarConfig,
    pub events: Vec<EventLayout>,
}

/// Geometría final de un resize hecho en el cliente
#[derive(Debug, Deserialize, Validate)]
pub struct GeometryRequest {
    pub direction: ResizeDirection,
    #[validate(range(min = 0.0, message = "top must not be negative"))]
    pub top: f64,
    #[validate(range(min = 0.0, message = "height must not be negative"))]
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_vehicles() {
        let query = WeekQuery {
            date: None,
            vehicle_ids: Some("1, 2,,3".into()),
        };
        assert_eq!(query.selected_vehicles().unwrap(), Some(vec![1, 2, 3]));
        assert_eq!(WeekQuery::default().selected_vehicles().unwrap(), None);

        let query = WeekQuery {
            date: None,
            vehicle_ids: Some("1,x".into()),
        };
        assert!(query.selected_vehicles().is_err());
    }

    #[test]
    fn test_geometry_request() {
        let request: GeometryRequest =
            serde_json::from_str(r#"{"direction": "top", "top": 760, "height": 120}"#).unwrap();
        assert_eq!(request.direction, ResizeDirection::Top);
        assert!(request.validate().is_ok());

        let request: GeometryRequest =
            serde_json::from_str(r#"{"direction": "bottom", "top": -1, "height": 120}"#).unwrap();
        assert!(request.validate().is_err());

        assert!(serde_json::from_str::<GeometryRequest>(r#"{"direction": "left", "top": 0, "height": 1}"#).is_err());
    }
}
