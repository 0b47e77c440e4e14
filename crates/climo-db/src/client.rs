//! Database client and connection management

use crate::DbResult;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;

/// Database client wrapping an sqlx connection pool.
///
/// Every query acquires a connection from the pool for its own duration
/// and releases it on completion, including error paths. No connection
/// is held across requests.
#[derive(Clone)]
pub struct DbClient {
    pool: SqlitePool,
}

impl DbClient {
    /// Create a new database client from a connection string
    /// (e.g. `sqlite:climate.sqlite`).
    pub async fn new(database_url: &str) -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new database client with custom options
    pub async fn with_options(opts: SqliteConnectOptions) -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(opts)
            .await?;

        Ok(Self { pool })
    }

    /// Wrap an already-built pool (used by tests with in-memory databases)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get reference to underlying pool for direct queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Test the database connection
    pub async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool gracefully
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Build SQLite connection options for the read-only dataset file
pub struct DbConnectionBuilder {
    filename: String,
    read_only: bool,
}

impl DbConnectionBuilder {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            read_only: true,
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn build(self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.filename)
            .read_only(self.read_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ping_answers_on_in_memory_db() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let client = DbClient::from_pool(pool);
        client.ping().await.unwrap();
    }

    #[test]
    fn connection_builder_defaults_to_read_only() {
        let builder = DbConnectionBuilder::new("climate.sqlite");
        assert!(builder.read_only);
        // Actual connection tests require a real database file
        let _opts = builder.build();
    }
}
