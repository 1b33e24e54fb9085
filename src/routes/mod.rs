//! Rutas de la API
//!
//! Cada recurso expone su propio router; `create_api_router` los monta
//! bajo `/api` con la autenticación que corresponde.

pub mod auth_routes;
pub mod calendar_routes;
pub mod company_routes;
pub mod dashboard_routes;
pub mod employee_routes;
pub mod operation_routes;
pub mod user_routes;
pub mod vehicle_routes;
pub mod vehicle_type_routes;

use axum::{middleware, Router};

use crate::middleware::auth_middleware;
use crate::state::AppState;

/// Router de `/api`. Todo exige token salvo login y alta de usuarios.
pub fn create_api_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/employees", employee_routes::create_employee_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/vehicles-types", vehicle_type_routes::create_vehicle_type_router())
        .nest("/companies", company_routes::create_company_router())
        .nest("/operations", operation_routes::create_operation_router())
        .nest("/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/calendar", calendar_routes::create_calendar_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest("/auth", auth_routes::create_auth_router())
        .nest("/users", user_routes::create_user_router(state))
        .merge(protected)
}
