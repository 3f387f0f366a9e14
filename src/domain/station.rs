use serde::{Deserialize, Serialize};

/// Reference data for an observing station (`station` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Station {
    pub id: i64,
    #[sqlx(rename = "station")]
    pub code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// Flat directory entry as served to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: i64,
    pub station: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub elevation: f64,
}

impl From<Station> for StationRecord {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            station: s.code,
            name: s.name,
            lat: s.latitude,
            lng: s.longitude,
            elevation: s.elevation,
        }
    }
}
