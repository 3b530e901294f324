//! Postgres backend implementation

use crate::error::{DbError, DbResult};
use crate::traits::Database;
use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

/// Postgres database backend
///
/// Statement ordering matters for this workload (seeds must observe the
/// tables created before them), so the pool is capped at a single connection
/// and callers submit statements one at a time.
pub struct PgBackend {
    pool: PgPool,
}

impl PgBackend {
    /// Connect using a Postgres connection string.
    pub async fn connect(url: &str) -> DbResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(|e| DbError::Connection(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Close the underlying connection.
    ///
    /// The pool also closes when the backend is dropped; this exists for
    /// callers that outlive the run, such as the HTTP surface.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Database for PgBackend {
    async fn execute(&self, sql: &str) -> DbResult<u64> {
        let result = sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(DbError::from)?;
        log::debug!("executed statement, {} rows affected", result.rows_affected());
        Ok(result.rows_affected())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
