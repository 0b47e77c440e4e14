//! HTTP surface for the climate observation dataset
//!
//! Read-only routes; each handler runs a single query through
//! [`climo_db::DbClient`] and serializes the rows to JSON. The two
//! flattened shapes (tobs pairs and per-date stat 4-tuples) keep the
//! wire format of the service this replaces: row fields concatenated
//! in order with no nesting, so consumers regroup by arity.

mod dates;
mod error;

pub use error::ApiError;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use climo_db::{DailyTempStats, DbClient, PrecipRow, TobsRow};
use serde_json::{json, Value};

#[derive(Clone)]
pub struct AppState {
    db: DbClient,
}

impl AppState {
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthz", get(healthz))
        .route("/api/v1.0/precipitation", get(precipitation))
        .route("/api/v1.0/stations", get(stations))
        .route("/api/v1.0/tobs", get(tobs))
        .route("/api/v1.0/start/:start_date", get(temp_stats_from_start))
        .route("/api/v1.0/start/end/:start/:end", get(temp_stats_for_range))
        .with_state(state)
}

async fn index() -> &'static str {
    "Available Routes:\n\
     Precipitation: /api/v1.0/precipitation\n\
     List of Stations: /api/v1.0/stations\n\
     Temperature for one year: /api/v1.0/tobs\n\
     Temperature stats from a start date: /api/v1.0/start/MMDDYYYY\n\
     Temperature stats over a date range: /api/v1.0/start/end/MMDDYYYY/MMDDYYYY\n\
     Dates are MMDDYYYY; the start date should not be later than 2017-08-23.\n"
}

async fn healthz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// `{date, prcp}` per measurement row, storage order, nulls intact
async fn precipitation(State(state): State<AppState>) -> Result<Json<Vec<PrecipRow>>, ApiError> {
    let rows = state.db.all_precipitation().await?;
    Ok(Json(rows))
}

/// Flat list of station codes
async fn stations(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let codes = state.db.station_codes().await?;
    Ok(Json(codes))
}

/// Last year of observations for the most-active station, flattened to
/// alternating date, tobs, date, tobs...
async fn tobs(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    let rows = state.db.tobs_most_active_last_year().await?;
    Ok(Json(flatten_tobs(rows)))
}

async fn temp_stats_from_start(
    State(state): State<AppState>,
    Path(start_date): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let start = dates::parse_mmddyyyy(&start_date)?;
    let rows = state.db.daily_temp_stats_from(start).await?;
    Ok(Json(flatten_stats(rows)))
}

async fn temp_stats_for_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let start = dates::parse_mmddyyyy(&start)?;
    let end = dates::parse_mmddyyyy(&end)?;
    let rows = state.db.daily_temp_stats_between(start, end).await?;
    Ok(Json(flatten_stats(rows)))
}

fn flatten_tobs(rows: Vec<TobsRow>) -> Vec<Value> {
    let mut out = Vec::with_capacity(rows.len() * 2);
    for row in rows {
        out.push(Value::String(row.date));
        out.push(json!(row.tobs));
    }
    out
}

fn flatten_stats(rows: Vec<DailyTempStats>) -> Vec<Value> {
    let mut out = Vec::with_capacity(rows.len() * 4);
    for row in rows {
        out.push(Value::String(row.date));
        out.push(json!(row.tmin));
        out.push(json!(row.tmax));
        out.push(json!(row.tavg));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tobs_flatten_is_row_major() {
        let rows = vec![
            TobsRow {
                date: "2017-08-22".to_string(),
                tobs: 79.0,
            },
            TobsRow {
                date: "2017-08-23".to_string(),
                tobs: 76.0,
            },
        ];
        let flat = flatten_tobs(rows);
        assert_eq!(flat, vec![json!("2017-08-22"), json!(79.0), json!("2017-08-23"), json!(76.0)]);
    }

    #[test]
    fn stats_flatten_keeps_field_order_and_nulls() {
        let rows = vec![DailyTempStats {
            date: "2017-08-22".to_string(),
            tmin: Some(71.0),
            tmax: Some(81.0),
            tavg: None,
        }];
        let flat = flatten_stats(rows);
        assert_eq!(
            flat,
            vec![json!("2017-08-22"), json!(71.0), json!(81.0), Value::Null]
        );
    }
}
