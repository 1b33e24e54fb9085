//! Repositorios
//!
//! Acceso a PostgreSQL con `sqlx::query_as` y filas `FromRow`.

pub mod company_repository;
pub mod employee_repository;
pub mod operation_repository;
pub mod user_repository;
pub mod vehicle_repository;
pub mod vehicle_type_repository;

pub use company_repository::CompanyRepository;
pub use employee_repository::EmployeeRepository;
pub use operation_repository::OperationRepository;
pub use user_repository::UserRepository;
pub use vehicle_repository::VehicleRepository;
pub use vehicle_type_repository::VehicleTypeRepository;
