use serde::Deserialize;

use crate::services::dashboard_service::DashboardFilter;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_optional_date, parse_optional_id};

/// Query string del dashboard; todos los filtros son opcionales
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub driver_id: Option<String>,
}

impl DashboardQuery {
    /// Parsear los filtros; vacío cuenta como ausente, malformado es un 400
    pub fn into_filter(self) -> Result<DashboardFilter, AppError> {
        Ok(DashboardFilter {
            start_date: parse_optional_date("startDate", self.start_date.as_deref())?,
            end_date: parse_optional_date("endDate", self.end_date.as_deref())?,
            driver_id: parse_optional_id("driverId", self.driver_id.as_deref())?,
        })
    }
}
