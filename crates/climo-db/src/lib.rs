//! Database access layer for the climate observation SQLite dataset
//!
//! Uses the existing station/measurement schema as populated by the
//! upstream data pipeline - NO migrations. The dataset is read-only;
//! this crate never writes a row.

pub mod client;
pub mod queries;
pub mod schema;

pub use client::*;
pub use queries::{LAST_OBSERVED_DATE, MOST_ACTIVE_STATION};
pub use schema::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[from] sqlx::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type DbResult<T> = Result<T, DbError>;
