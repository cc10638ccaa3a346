// Per-request PostgreSQL connection provider

use crate::config::DatabaseConfig;
use crate::errors::DatabaseError;
use sqlx::{Connection, PgConnection};
use tracing::instrument;

/// Opens one database connection per invocation
///
/// There is no pool and no reuse across requests: every caller gets a fresh
/// `PgConnection` and owns it for the duration of one request. The connection
/// closes when the handle is dropped, on every exit path. Connectivity and
/// authentication failures are converted into
/// [`DatabaseError::ConnectionFailed`] so a missing or invalid database URL
/// degrades into per-request errors instead of taking the process down.
#[derive(Debug, Clone)]
pub struct DbConnector {
    url: String,
}

impl DbConnector {
    pub fn new(config: &DatabaseConfig) -> Self {
        Self {
            url: config.url.clone(),
        }
    }

    /// Open a fresh connection to the configured database
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<PgConnection, DatabaseError> {
        PgConnection::connect(&self.url).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to connect to database");
            DatabaseError::ConnectionFailed(e.to_string())
        })
    }

    /// Perform a health check against the database
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        let mut conn = self.connect().await?;

        sqlx::query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                DatabaseError::HealthCheckFailed(e.to_string())
            })?;

        conn.close().await.ok();
        tracing::debug!("Database health check passed");
        Ok(())
    }
}
