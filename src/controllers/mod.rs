//! Controladores
//!
//! Validan los payloads, delegan en repositorios y servicios y traducen
//! filas ausentes a 404.

pub mod auth_controller;
pub mod calendar_controller;
pub mod company_controller;
pub mod dashboard_controller;
pub mod employee_controller;
pub mod operation_controller;
pub mod user_controller;
pub mod vehicle_controller;
pub mod vehicle_type_controller;
