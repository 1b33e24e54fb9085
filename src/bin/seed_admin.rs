//! Crea o actualiza el usuario administrador
//!
//! `ADMIN_PASSWORD` define la contraseña (por defecto `Admin`).

use anyhow::{Context, Result};
use bcrypt::{hash, DEFAULT_COST};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use frelog_backend::{database::DatabaseConnection, repositories::UserRepository};

const ADMIN_NAME: &str = "Admin";
const ADMIN_EMAIL: &str = "admin@frelog.com";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "Admin".to_string());

    let db = DatabaseConnection::new_default().await?;
    db.run_migrations().await?;

    let password_hash = hash(&password, DEFAULT_COST).context("Error hasheando la contraseña")?;
    let user = UserRepository::new(db.pool().clone())
        .upsert_by_email(ADMIN_NAME, ADMIN_EMAIL, &password_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Error guardando el administrador: {}", e))?;

    info!("✅ Administrador listo: {} (id {})", user.email, user.id);
    Ok(())
}
