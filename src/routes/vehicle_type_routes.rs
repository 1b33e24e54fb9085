use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::vehicle_type_controller::VehicleTypeController;
use crate::dto::vehicle_type_dto::VehicleTypeRequest;
use crate::dto::MessageResponse;
use crate::models::vehicle_type::VehicleType;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_type_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicle_types).post(create_vehicle_type))
        .route("/:id", get(get_vehicle_type).put(update_vehicle_type).delete(delete_vehicle_type))
}

async fn list_vehicle_types(State(state): State<AppState>) -> Result<Json<Vec<VehicleType>>, AppError> {
    let controller = VehicleTypeController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_vehicle_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehicleType>, AppError> {
    let controller = VehicleTypeController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_vehicle_type(
    State(state): State<AppState>,
    Json(request): Json<VehicleTypeRequest>,
) -> Result<(StatusCode, Json<VehicleType>), AppError> {
    let controller = VehicleTypeController::new(state.pool.clone());
    let vehicle_type = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(vehicle_type)))
}

async fn update_vehicle_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<VehicleTypeRequest>,
) -> Result<Json<VehicleType>, AppError> {
    let controller = VehicleTypeController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_vehicle_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = VehicleTypeController::new(state.pool.clone());
    Ok(Json(controller.delete(id).await?))
}
