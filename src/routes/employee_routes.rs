use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crate::controllers::employee_controller::EmployeeController;
use crate::dto::employee_dto::EmployeeRequest;
use crate::dto::MessageResponse;
use crate::models::employee::Employee;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_employee_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route("/:id", get(get_employee).put(update_employee).delete(delete_employee))
}

async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Employee>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let employee = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<Employee>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.delete(id).await?))
}
