use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardQuery;
use crate::models::dashboard::DashboardSummary;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(get_dashboard))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.summary(query).await?))
}
