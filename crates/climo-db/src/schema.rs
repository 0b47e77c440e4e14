//! Row types matching the climate dataset SQLite schema
//!
//! IMPORTANT: These projections must maintain strict parity with the
//! station/measurement tables as shipped in the dataset file. Do not
//! rename fields without verifying against the actual schema.
//!
//! Dates are stored as TEXT in `YYYY-MM-DD` form and are carried
//! through as strings; nothing here re-parses them.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One (date, precipitation) reading from the measurement table.
/// `prcp` is nullable in the source data and passes through as-is.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PrecipRow {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One (date, temperature observation) reading from the measurement table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TobsRow {
    pub date: String,
    pub tobs: f64,
}

/// Per-date temperature aggregate (one row per distinct date).
///
/// The aggregates follow SQL semantics: nulls are excluded from
/// MIN/MAX/AVG, so a date whose readings are all null yields nulls.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct DailyTempStats {
    pub date: String,
    pub tmin: Option<f64>,
    pub tmax: Option<f64>,
    pub tavg: Option<f64>,
}

/// Table names in the dataset file
pub mod tables {
    pub const STATION: &str = "station";
    pub const MEASUREMENT: &str = "measurement";
}
