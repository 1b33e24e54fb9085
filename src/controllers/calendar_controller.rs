use chrono::NaiveTime;
use sqlx::PgPool;
use validator::Validate;

use crate::calendar::resize::{LiveGeometry, ResizeCommit};
use crate::calendar::{layout_week, CalendarConfig, OperationStore, ViewState};
use crate::dto::calendar_dto::{GeometryRequest, WeekQuery, WeekResponse};
use crate::models::operation::Operation;
use crate::repositories::{OperationRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};

pub struct CalendarController {
    operations: OperationRepository,
    vehicles: VehicleRepository,
    config: CalendarConfig,
}

impl CalendarController {
    pub fn new(pool: PgPool, config: CalendarConfig) -> Self {
        Self {
            operations: OperationRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
            config,
        }
    }

    /// Semana que contiene `date` (hoy si falta) con el layout de sus operaciones
    pub async fn week(&self, query: WeekQuery) -> Result<WeekResponse, AppError> {
        let reference_date = query
            .reference_date()?
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let selected = match query.selected_vehicles()? {
            Some(ids) => ids,
            None => self.vehicles.list_all().await?.into_iter().map(|v| v.id).collect(),
        };

        let view = ViewState::new(reference_date, selected);
        let week = view.week();
        let operations = self
            .operations
            .list_in_range(week.start().and_time(NaiveTime::MIN), week.end().and_time(NaiveTime::MIN))
            .await?;

        Ok(WeekResponse {
            days: week.days(),
            events: layout_week(&operations, &view, &self.config),
            grid: self.config,
            week,
        })
    }

    /// Persistir el resultado de un resize: nueva duración y, si se arrastró
    /// el borde superior, nuevo inicio en el mismo día
    pub async fn commit_geometry(&self, id: i32, request: GeometryRequest) -> Result<Operation, AppError> {
        request.validate()?;

        let operation = self
            .operations
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Operation"))?;

        let commit = ResizeCommit {
            operation_id: id,
            direction: request.direction,
            geometry: LiveGeometry {
                top: request.top,
                height: request.height.max(self.config.min_event_height),
            },
        };
        let patch = commit.to_patch(operation.operation_date, &self.config);

        tracing::info!(
            "📅 Resize de operación {}: {:?} -> {:?}",
            id,
            operation.estimated_time,
            patch.estimated_time
        );

        self.operations.patch_operation(id, &patch).await
    }
}
