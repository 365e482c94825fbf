use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("database error: {0}")]
    Pool(#[from] sqlx::Error),

    #[error("not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

/// Handle to the PostgreSQL connection pool.
///
/// Built once at startup and shared across request handlers; each query
/// checks a connection out of the pool and returns it when the call
/// completes, whether it succeeded or failed.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        tracing::info!("Connecting to PostgreSQL");
        let pool = Self::pool_options().connect(&config.url).await?;
        Ok(Db { pool })
    }

    /// Build the pool without opening a connection up front.
    ///
    /// Connections are established on first use, which lets tests construct
    /// application state without a running database.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, DbError> {
        let pool = Self::pool_options().connect_lazy(&config.url)?;
        Ok(Db { pool })
    }

    fn pool_options() -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(5)
            .test_before_acquire(true)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
