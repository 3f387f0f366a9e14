//! Query engine for the five read-only operations.
//!
//! The engine owns no state besides a handle to the store: each call resolves
//! its own window and issues its own store queries.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::domain::{
    DateRange, Observation, PrecipitationRecord, StationRecord, TemperatureRecord,
    TemperatureStats,
};
use crate::store::{ObservationStore, StoreError};

/// Length of the "recent year" window. Fixed day count, not calendar years.
pub const RECENT_WINDOW_DAYS: i64 = 365;

/// Format accepted for caller-supplied dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no observations recorded")]
    EmptyStore,

    #[error("malformed {field} date '{value}', expected YYYY-MM-DD")]
    MalformedDate { field: &'static str, value: String },

    #[error("observation store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("observation store error: {0}")]
    Store(String),
}

impl From<StoreError> for QueryError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Empty => QueryError::EmptyStore,
            StoreError::Unavailable(msg) => QueryError::StoreUnavailable(msg),
            StoreError::Query(msg) => QueryError::Store(msg),
        }
    }
}

pub type QueryResult<T> = Result<T, QueryError>;

/// Parse a caller-supplied `YYYY-MM-DD` date
pub fn parse_date(field: &'static str, value: &str) -> QueryResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| QueryError::MalformedDate {
        field,
        value: value.to_string(),
    })
}

/// Start of the recent window: exactly 365 days before `latest`
pub fn window_start(latest: NaiveDate) -> NaiveDate {
    latest - Duration::days(RECENT_WINDOW_DAYS)
}

#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<dyn ObservationStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn ObservationStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn ObservationStore> {
        &self.store
    }

    pub async fn latest_date(&self) -> QueryResult<NaiveDate> {
        Ok(self.store.max_date().await?)
    }

    /// Open-ended window starting 365 days before the latest observation
    pub async fn recent_window(&self) -> QueryResult<DateRange> {
        let latest = self.latest_date().await?;
        Ok(DateRange::since(window_start(latest)))
    }

    /// Observations strictly after the window start. The start day itself is
    /// not part of the series: latest 2017-08-23 yields rows from 2016-08-24.
    async fn recent_observations(&self) -> QueryResult<Vec<Observation>> {
        let window = self.recent_window().await?;
        let first_day = window.start + Duration::days(1);
        Ok(self.store.select_observations(DateRange::since(first_day)).await?)
    }

    /// `{date, prcp}` for the recent window, in store order, nulls kept
    pub async fn recent_precipitation(&self) -> QueryResult<Vec<PrecipitationRecord>> {
        let rows = self.recent_observations().await?;
        Ok(rows.iter().map(PrecipitationRecord::from).collect())
    }

    /// `{date, tobs}` for the recent window, in store order, nulls kept
    pub async fn recent_temperature(&self) -> QueryResult<Vec<TemperatureRecord>> {
        let rows = self.recent_observations().await?;
        Ok(rows.iter().map(TemperatureRecord::from).collect())
    }

    pub async fn station_directory(&self) -> QueryResult<Vec<StationRecord>> {
        let stations = self.store.select_all_stations().await?;
        Ok(stations.into_iter().map(StationRecord::from).collect())
    }

    pub async fn aggregate_from(&self, start: NaiveDate) -> QueryResult<TemperatureStats> {
        Ok(self.store.aggregate_tobs(DateRange::since(start)).await?)
    }

    /// `end` is inclusive. A reversed range is not an error; it simply
    /// matches nothing.
    pub async fn aggregate_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> QueryResult<TemperatureStats> {
        Ok(self.store.aggregate_tobs(DateRange::between(start, end)).await?)
    }

    /// Single-record list of temperature stats from `start` onward
    pub async fn stats_from(&self, start: &str) -> QueryResult<Vec<TemperatureStats>> {
        let start = parse_date("start", start)?;
        Ok(vec![self.aggregate_from(start).await?])
    }

    /// Single-record list of temperature stats in `[start, end]`
    pub async fn stats_between(&self, start: &str, end: &str) -> QueryResult<Vec<TemperatureStats>> {
        let start = parse_date("start", start)?;
        let end = parse_date("end", end)?;
        Ok(vec![self.aggregate_between(start, end).await?])
    }
}
