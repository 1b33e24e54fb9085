//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja la conexión a la base de datos y la aplicación
//! de migraciones al arrancar.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Migraciones embebidas desde `migrations/`
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Conexión a la base de datos con su pool
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración dada
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        tracing::info!("🔌 Conectando a {}", mask_database_url(&config.url));
        let pool = config
            .create_pool()
            .await
            .context("Error conectando a la base de datos")?;

        Ok(Self { pool })
    }

    /// Conectar usando `DATABASE_URL`
    pub async fn new_default() -> Result<Self> {
        let config = DatabaseConfig::from_env()?;
        Self::connect(&config).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verificar que la conexión funciona
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        ping(&self.pool).await
    }

    /// Ejecutar migraciones de la base de datos
    pub async fn run_migrations(&self) -> Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .context("Error ejecutando migraciones")?;
        tracing::info!("✅ Migraciones aplicadas");
        Ok(())
    }
}

/// `SELECT 1` contra el pool
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Función helper para enmascarar la URL de la base de datos en logs
fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
