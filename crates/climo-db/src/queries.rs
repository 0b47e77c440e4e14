//! Read operations against the station/measurement tables
//!
//! Each operation is a single parametrized query: no retries, no local
//! recovery. Failures surface as `DbError` and propagate to the caller.

use crate::schema::{DailyTempStats, PrecipRow, TobsRow};
use crate::{DbClient, DbResult};
use chrono::{Days, NaiveDate};
use tracing::{debug, instrument};

/// Station with the most measurement rows in the dataset.
///
/// Fixed ahead of time from the source data rather than computed per
/// request; the dataset never changes underneath us.
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// Last observation date present in the dataset
pub const LAST_OBSERVED_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2017, 8, 23) {
    Some(d) => d,
    None => panic!("invalid reference date"),
};

impl DbClient {
    /// Every (date, prcp) pair across all measurements, in storage order.
    /// Null precipitation values pass through untouched.
    #[instrument(skip(self))]
    pub async fn all_precipitation(&self) -> DbResult<Vec<PrecipRow>> {
        let rows = sqlx::query_as::<_, PrecipRow>(
            r#"
            SELECT date, prcp FROM measurement
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        debug!("Retrieved {} precipitation rows", rows.len());
        Ok(rows)
    }

    /// Every station code from the station table, in storage order
    #[instrument(skip(self))]
    pub async fn station_codes(&self) -> DbResult<Vec<String>> {
        let codes = sqlx::query_scalar::<_, String>(
            r#"
            SELECT station FROM station
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        debug!("Retrieved {} station codes", codes.len());
        Ok(codes)
    }

    /// (date, tobs) pairs for the most-active station over the 365 days
    /// preceding the last observed date
    #[instrument(skip(self))]
    pub async fn tobs_most_active_last_year(&self) -> DbResult<Vec<TobsRow>> {
        let window_start = LAST_OBSERVED_DATE - Days::new(365);

        let rows = sqlx::query_as::<_, TobsRow>(
            r#"
            SELECT date, tobs FROM measurement
            WHERE station = ? AND date >= ?
            "#,
        )
        .bind(MOST_ACTIVE_STATION)
        .bind(window_start.format("%Y-%m-%d").to_string())
        .fetch_all(self.pool())
        .await?;

        debug!(
            "Retrieved {} temperature observations for {} since {}",
            rows.len(),
            MOST_ACTIVE_STATION,
            window_start
        );
        Ok(rows)
    }

    /// Per-date MIN/MAX/AVG temperature for every date >= start
    #[instrument(skip(self))]
    pub async fn daily_temp_stats_from(&self, start: NaiveDate) -> DbResult<Vec<DailyTempStats>> {
        let rows = sqlx::query_as::<_, DailyTempStats>(
            r#"
            SELECT date, MIN(tobs) AS tmin, MAX(tobs) AS tmax, AVG(tobs) AS tavg
            FROM measurement
            WHERE date >= ?
            GROUP BY date
            "#,
        )
        .bind(start.format("%Y-%m-%d").to_string())
        .fetch_all(self.pool())
        .await?;

        debug!("Aggregated {} dates from {}", rows.len(), start);
        Ok(rows)
    }

    /// Per-date MIN/MAX/AVG temperature for start <= date <= end
    #[instrument(skip(self))]
    pub async fn daily_temp_stats_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<DailyTempStats>> {
        let rows = sqlx::query_as::<_, DailyTempStats>(
            r#"
            SELECT date, MIN(tobs) AS tmin, MAX(tobs) AS tmax, AVG(tobs) AS tavg
            FROM measurement
            WHERE date >= ? AND date <= ?
            GROUP BY date
            "#,
        )
        .bind(start.format("%Y-%m-%d").to_string())
        .bind(end.format("%Y-%m-%d").to_string())
        .fetch_all(self.pool())
        .await?;

        debug!("Aggregated {} dates between {} and {}", rows.len(), start, end);
        Ok(rows)
    }
}
