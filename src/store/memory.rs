use async_trait::async_trait;
use chrono::NaiveDate;

use super::{ObservationStore, StoreError};
use crate::domain::{DateRange, Observation, Station, TemperatureStats};

/// Snapshot store backed by plain vectors. Insertion order is the native order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    observations: Vec<Observation>,
    stations: Vec<Station>,
}

impl InMemoryStore {
    pub fn new(observations: Vec<Observation>, stations: Vec<Station>) -> Self {
        Self {
            observations,
            stations,
        }
    }

    pub fn with_observations(observations: Vec<Observation>) -> Self {
        Self::new(observations, Vec::new())
    }

    pub fn with_stations(stations: Vec<Station>) -> Self {
        Self::new(Vec::new(), stations)
    }

    fn in_range(&self, range: DateRange) -> impl Iterator<Item = &Observation> {
        self.observations
            .iter()
            .filter(move |obs| range.contains(obs.date))
    }
}

#[async_trait]
impl ObservationStore for InMemoryStore {
    async fn max_date(&self) -> Result<NaiveDate, StoreError> {
        self.observations
            .iter()
            .map(|obs| obs.date)
            .max()
            .ok_or(StoreError::Empty)
    }

    async fn select_observations(&self, range: DateRange) -> Result<Vec<Observation>, StoreError> {
        Ok(self.in_range(range).cloned().collect())
    }

    async fn select_all_stations(&self) -> Result<Vec<Station>, StoreError> {
        Ok(self.stations.clone())
    }

    async fn aggregate_tobs(&self, range: DateRange) -> Result<TemperatureStats, StoreError> {
        Ok(TemperatureStats::from_readings(
            self.in_range(range).map(|obs| obs.temperature_observed),
        ))
    }
}
