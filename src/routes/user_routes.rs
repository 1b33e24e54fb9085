use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::UserRequest;
use crate::dto::MessageResponse;
use crate::middleware::auth_middleware;
use crate::models::user::User;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// `POST /` queda público para el registro; el resto exige token
pub fn create_user_router(state: AppState) -> Router<AppState> {
    let auth = middleware::from_fn_with_state(state, auth_middleware);

    Router::new()
        .route("/", get(list_users).route_layer(auth.clone()).post(create_user))
        .route(
            "/:id",
            get(get_user).put(update_user).delete(delete_user).route_layer(auth),
        )
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let controller = UserController::new(state.pool.clone());
    let user = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UserRequest>,
) -> Result<Json<User>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    Ok(Json(controller.delete(id).await?))
}
