use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::{debug, info};

use super::{ObservationStore, StoreError};
use crate::config::StoreConfig;
use crate::domain::{DateRange, Observation, Station, TemperatureStats};

const LATEST_DATE: &str = "SELECT date FROM measurement ORDER BY date DESC LIMIT 1";

const OBSERVATIONS_SINCE: &str = r#"
    SELECT station, date, prcp, tobs
    FROM measurement
    WHERE date >= ?
    ORDER BY id
"#;

const OBSERVATIONS_BETWEEN: &str = r#"
    SELECT station, date, prcp, tobs
    FROM measurement
    WHERE date >= ? AND date <= ?
    ORDER BY id
"#;

const STATIONS: &str = r#"
    SELECT id, station, name, latitude, longitude, elevation
    FROM station
    ORDER BY id
"#;

const TOBS_SINCE: &str = r#"
    SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max
    FROM measurement
    WHERE date >= ?
"#;

const TOBS_BETWEEN: &str = r#"
    SELECT MIN(tobs) AS min, AVG(tobs) AS avg, MAX(tobs) AS max
    FROM measurement
    WHERE date >= ? AND date <= ?
"#;

/// SQLite-backed store over the `measurement` and `station` tables.
///
/// Each call checks a connection out of the pool for exactly one query. The
/// `PoolConnection` guard hands it back on drop, whichever way the call exits.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open a pool against the configured database
    pub async fn connect(cfg: &StoreConfig) -> Result<Self, StoreError> {
        info!(url = %cfg.url, read_only = cfg.read_only, "opening observation store");

        let options = SqliteConnectOptions::from_str(&cfg.url)?.read_only(cfg.read_only);
        let pool = SqlitePoolOptions::new()
            .max_connections(cfg.max_connections)
            .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn session(&self) -> Result<PoolConnection<Sqlite>, StoreError> {
        self.pool
            .acquire()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl ObservationStore for SqliteStore {
    async fn max_date(&self) -> Result<NaiveDate, StoreError> {
        let mut conn = self.session().await?;
        let latest: Option<NaiveDate> = sqlx::query_scalar(LATEST_DATE)
            .fetch_optional(&mut *conn)
            .await?;

        latest.ok_or(StoreError::Empty)
    }

    async fn select_observations(&self, range: DateRange) -> Result<Vec<Observation>, StoreError> {
        let mut conn = self.session().await?;
        let rows = match range.end {
            None => {
                sqlx::query_as::<_, Observation>(OBSERVATIONS_SINCE)
                    .bind(range.start)
                    .fetch_all(&mut *conn)
                    .await?
            }
            Some(end) => {
                sqlx::query_as::<_, Observation>(OBSERVATIONS_BETWEEN)
                    .bind(range.start)
                    .bind(end)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };

        debug!(start = %range.start, end = ?range.end, rows = rows.len(), "selected observations");
        Ok(rows)
    }

    async fn select_all_stations(&self) -> Result<Vec<Station>, StoreError> {
        let mut conn = self.session().await?;
        let stations = sqlx::query_as::<_, Station>(STATIONS)
            .fetch_all(&mut *conn)
            .await?;

        debug!(rows = stations.len(), "selected stations");
        Ok(stations)
    }

    async fn aggregate_tobs(&self, range: DateRange) -> Result<TemperatureStats, StoreError> {
        let mut conn = self.session().await?;
        let stats = match range.end {
            None => {
                sqlx::query_as::<_, TemperatureStats>(TOBS_SINCE)
                    .bind(range.start)
                    .fetch_one(&mut *conn)
                    .await?
            }
            Some(end) => {
                sqlx::query_as::<_, TemperatureStats>(TOBS_BETWEEN)
                    .bind(range.start)
                    .bind(end)
                    .fetch_one(&mut *conn)
                    .await?
            }
        };

        Ok(stats)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.session().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
