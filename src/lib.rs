//! Back office de Frelog
//!
//! API REST sobre PostgreSQL para empresas, vehículos, empleados y
//! operaciones de flete, con dashboard agregado y calendario semanal.

pub mod calendar;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Router completo de la aplicación
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api", routes::create_api_router(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config))
        .with_state(state)
}

async fn root() -> &'static str {
    "Frelog Backend is running"
}

async fn health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    database::ping(&state.pool).await?;
    Ok(Json(json!({
        "status": "ok",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
