//! `/api/v1.0` query routes

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use super::error::ApiError;
use crate::{
    app::AppState,
    domain::{PrecipitationRecord, StationRecord, TemperatureRecord, TemperatureStats},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/precipitation", get(get_precipitation))
        .route("/stations", get(get_stations))
        .route("/tobs", get(get_tobs))
        .route("/:start", get(get_stats_from))
        .route("/:start/:end", get(get_stats_between))
        .with_state(state)
}

/// Precipitation for the year before the latest recorded date
pub async fn get_precipitation(
    State(st): State<AppState>,
) -> Result<Json<Vec<PrecipitationRecord>>, ApiError> {
    Ok(Json(st.engine.recent_precipitation().await?))
}

pub async fn get_stations(
    State(st): State<AppState>,
) -> Result<Json<Vec<StationRecord>>, ApiError> {
    Ok(Json(st.engine.station_directory().await?))
}

/// Observed temperature for the year before the latest recorded date
pub async fn get_tobs(
    State(st): State<AppState>,
) -> Result<Json<Vec<TemperatureRecord>>, ApiError> {
    Ok(Json(st.engine.recent_temperature().await?))
}

pub async fn get_stats_from(
    State(st): State<AppState>,
    Path(start): Path<String>,
) -> Result<Json<Vec<TemperatureStats>>, ApiError> {
    Ok(Json(st.engine.stats_from(&start).await?))
}

pub async fn get_stats_between(
    State(st): State<AppState>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureStats>>, ApiError> {
    Ok(Json(st.engine.stats_between(&start, &end).await?))
}
