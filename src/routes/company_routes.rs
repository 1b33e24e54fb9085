use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::company_controller::CompanyController;
use crate::dto::company_dto::CompanyRequest;
use crate::dto::MessageResponse;
use crate::models::company::Company;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route("/:id", get(get_company).put(update_company).delete(delete_company))
}

async fn list_companies(State(state): State<AppState>) -> Result<Json<Vec<Company>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Company>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_company(
    State(state): State<AppState>,
    Json(request): Json<CompanyRequest>,
) -> Result<(StatusCode, Json<Company>), AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let company = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

async fn update_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CompanyRequest>,
) -> Result<Json<Company>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_company(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    Ok(Json(controller.delete(id).await?))
}
