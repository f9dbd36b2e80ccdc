use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Errors from pool setup and migrations
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Could not connect after {attempts} attempts: {source}")]
    ConnectionError {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Connection pool lifecycle for the quiz database
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the pool, retrying while the database comes up
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let attempts = config.connect_attempts.max(1);
        let retry_delay = Duration::from_millis(config.connect_retry_ms);
        let mut remaining = attempts;

        loop {
            match PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(url)
                .await
            {
                Ok(pool) => {
                    info!("Connected to PostgreSQL");
                    return Ok(pool);
                }
                Err(source) => {
                    remaining -= 1;
                    if remaining == 0 {
                        return Err(DatabaseError::ConnectionError { attempts, source });
                    }
                    warn!("Postgres is trying to connect, attempts left: {}", remaining);
                    tokio::time::sleep(retry_delay).await;
                }
            }
        }
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations").run(pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
