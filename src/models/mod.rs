//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod company;
pub mod dashboard;
pub mod employee;
pub mod operation;
pub mod user;
pub mod vehicle;
pub mod vehicle_type;
