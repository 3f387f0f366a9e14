use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One station-day record from the `measurement` table.
///
/// Either reading may be missing for a given day; sensor gaps are expected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Observation {
    #[sqlx(rename = "station")]
    pub station_code: String,
    pub date: NaiveDate,
    #[sqlx(rename = "prcp")]
    pub precipitation: Option<f64>,
    #[sqlx(rename = "tobs")]
    pub temperature_observed: Option<f64>,
}

impl Observation {
    pub fn new(
        station_code: impl Into<String>,
        date: NaiveDate,
        precipitation: Option<f64>,
        temperature_observed: Option<f64>,
    ) -> Self {
        Self {
            station_code: station_code.into(),
            date,
            precipitation,
            temperature_observed,
        }
    }
}

/// `{date, prcp}` row of the precipitation series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationRecord {
    pub date: NaiveDate,
    pub prcp: Option<f64>,
}

impl From<&Observation> for PrecipitationRecord {
    fn from(obs: &Observation) -> Self {
        Self {
            date: obs.date,
            prcp: obs.precipitation,
        }
    }
}

/// `{date, tobs}` row of the temperature series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub date: NaiveDate,
    pub tobs: Option<f64>,
}

impl From<&Observation> for TemperatureRecord {
    fn from(obs: &Observation) -> Self {
        Self {
            date: obs.date,
            tobs: obs.temperature_observed,
        }
    }
}
