//! Services module
//!
//! Lógica de negocio que no es un CRUD directo sobre una tabla.

pub mod dashboard_service;

pub use dashboard_service::{DashboardFilter, DashboardService};
