use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use crate::controllers::calendar_controller::CalendarController;
use crate::dto::calendar_dto::{GeometryRequest, WeekQuery, WeekResponse};
use crate::models::operation::Operation;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_calendar_router() -> Router<AppState> {
    Router::new()
        .route("/week", get(get_week))
        .route("/operations/:id/geometry", put(commit_geometry))
}

async fn get_week(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeekResponse>, AppError> {
    let controller = CalendarController::new(state.pool.clone(), state.config.calendar);
    Ok(Json(controller.week(query).await?))
}

async fn commit_geometry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<GeometryRequest>,
) -> Result<Json<Operation>, AppError> {
    let controller = CalendarController::new(state.pool.clone(), state.config.calendar);
    Ok(Json(controller.commit_geometry(id, request).await?))
}
