use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::operation_controller::OperationController;
use crate::dto::operation_dto::{CreateOperationRequest, OperationPatch};
use crate::dto::MessageResponse;
use crate::models::operation::Operation;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_operation_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_operations).post(create_operation))
        .route(
            "/:id",
            get(get_operation)
                .put(update_operation)
                .patch(update_operation)
                .delete(delete_operation),
        )
}

async fn list_operations(State(state): State<AppState>) -> Result<Json<Vec<Operation>>, AppError> {
    let controller = OperationController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_operation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Operation>, AppError> {
    let controller = OperationController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_operation(
    State(state): State<AppState>,
    Json(request): Json<CreateOperationRequest>,
) -> Result<(StatusCode, Json<Operation>), AppError> {
    let controller = OperationController::new(state.pool.clone());
    let operation = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(operation)))
}

// PUT y PATCH comparten la actualización parcial
async fn update_operation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<OperationPatch>,
) -> Result<Json<Operation>, AppError> {
    let controller = OperationController::new(state.pool.clone());
    Ok(Json(controller.update(id, patch).await?))
}

async fn delete_operation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = OperationController::new(state.pool.clone());
    Ok(Json(controller.delete(id).await?))
}
