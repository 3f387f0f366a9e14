//! Read-only access to the observation store.
//!
//! The query engine only sees [`ObservationStore`]; backends decide how rows
//! are fetched and how connections are scoped.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{DateRange, Observation, Station, TemperatureStats};

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no observations recorded")]
    Empty,

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(error.to_string()),
            // SQLITE_CANTOPEN
            sqlx::Error::Database(ref db_err) if db_err.code().as_deref() == Some("14") => {
                StoreError::Unavailable(error.to_string())
            }
            _ => StoreError::Query(error.to_string()),
        }
    }
}

/// Fixed query interface over the `measurement` and `station` collections.
///
/// Every sequence is returned in the store's native order.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// Latest recorded observation date, or [`StoreError::Empty`]
    async fn max_date(&self) -> Result<NaiveDate, StoreError>;

    /// Observations whose date falls inside `range` (both bounds inclusive)
    async fn select_observations(&self, range: DateRange) -> Result<Vec<Observation>, StoreError>;

    async fn select_all_stations(&self) -> Result<Vec<Station>, StoreError>;

    /// Min/avg/max of non-null temperatures inside `range`; all-`None` when
    /// nothing matches
    async fn aggregate_tobs(&self, range: DateRange) -> Result<TemperatureStats, StoreError>;

    /// Cheap connectivity probe for health checks
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
