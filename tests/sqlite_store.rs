mod common;

use std::sync::Arc;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use station_climate_api::domain::DateRange;
use station_climate_api::query::{QueryEngine, QueryError};
use station_climate_api::store::{ObservationStore, SqliteStore, StoreError};
use tempfile::TempDir;

use common::{day, observations, stations, test_config};

const SCHEMA: &[&str] = &[
    "CREATE TABLE measurement (id INTEGER NOT NULL PRIMARY KEY, station TEXT, date TEXT, prcp FLOAT, tobs FLOAT)",
    "CREATE TABLE station (id INTEGER NOT NULL PRIMARY KEY, station TEXT, name TEXT, latitude FLOAT, longitude FLOAT, elevation FLOAT)",
];

/// Write a fixture database and return a read-only store over it
async fn seeded_store(dir: &TempDir, seed: bool) -> SqliteStore {
    let path = dir.path().join("hawaii.sqlite");
    let writer = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(&path).create_if_missing(true))
        .await
        .unwrap();

    for stmt in SCHEMA {
        sqlx::query(stmt).execute(&writer).await.unwrap();
    }

    if seed {
        for obs in observations() {
            sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
                .bind(&obs.station_code)
                .bind(obs.date)
                .bind(obs.precipitation)
                .bind(obs.temperature_observed)
                .execute(&writer)
                .await
                .unwrap();
        }
        for s in stations() {
            sqlx::query(
                "INSERT INTO station (id, station, name, latitude, longitude, elevation) VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(s.id)
            .bind(&s.code)
            .bind(&s.name)
            .bind(s.latitude)
            .bind(s.longitude)
            .bind(s.elevation)
            .execute(&writer)
            .await
            .unwrap();
        }
    }
    writer.close().await;

    let cfg = test_config(&format!("sqlite://{}", path.display()));
    SqliteStore::connect(&cfg.store).await.unwrap()
}

#[tokio::test]
async fn test_max_date() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;
    assert_eq!(store.max_date().await.unwrap(), day("2017-08-23"));
}

#[tokio::test]
async fn test_max_date_on_empty_table() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, false).await;
    assert!(matches!(store.max_date().await, Err(StoreError::Empty)));
}

#[tokio::test]
async fn test_select_observations_keeps_insertion_order_and_nulls() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;

    let rows = store
        .select_observations(DateRange::since(day("2017-08-01")))
        .await
        .unwrap();
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![
            day("2017-08-20"),
            day("2017-08-01"),
            day("2017-08-22"),
            day("2017-08-10"),
            day("2017-08-23"),
        ]
    );
    assert_eq!(rows[2].precipitation, None);
    assert_eq!(rows[2].temperature_observed, None);
}

#[tokio::test]
async fn test_select_observations_end_inclusive() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;

    let rows = store
        .select_observations(DateRange::between(day("2017-08-10"), day("2017-08-20")))
        .await
        .unwrap();
    let dates: Vec<_> = rows.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day("2017-08-20"), day("2017-08-10")]);
}

#[tokio::test]
async fn test_stations_verbatim() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;
    assert_eq!(store.select_all_stations().await.unwrap(), stations());
}

#[tokio::test]
async fn test_aggregate_tobs_skips_nulls() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;

    let stats = store
        .aggregate_tobs(DateRange::between(day("2017-08-05"), day("2017-08-22")))
        .await
        .unwrap();
    assert_eq!(stats.min, Some(80.0));
    assert_eq!(stats.avg, Some(85.0));
    assert_eq!(stats.max, Some(90.0));
}

#[tokio::test]
async fn test_aggregate_tobs_empty_range_is_null() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;

    let stats = store
        .aggregate_tobs(DateRange::between(day("2017-08-23"), day("2017-08-01")))
        .await
        .unwrap();
    assert!(stats.is_empty());
}

#[tokio::test]
async fn test_engine_over_sqlite() {
    let dir = TempDir::new().unwrap();
    let engine = QueryEngine::new(Arc::new(seeded_store(&dir, true).await));

    let series = engine.recent_precipitation().await.unwrap();
    assert_eq!(series.len(), 5);

    let stats = engine.stats_between("2017-08-05", "2017-08-23").await.unwrap();
    assert_eq!(stats[0].min, Some(80.0));
    assert_eq!(stats[0].max, Some(90.0));
}

#[tokio::test]
async fn test_connections_released_after_each_query() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;

    // More calls than the pool holds; a leaked connection would time out.
    for _ in 0..10 {
        store.max_date().await.unwrap();
        let rows = store
            .select_observations(DateRange::since(day("2099-01-01")))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }
}

#[tokio::test]
async fn test_connections_released_after_failed_queries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.sqlite");
    let writer = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(&path).create_if_missing(true))
        .await
        .unwrap();
    sqlx::query("CREATE TABLE unrelated (x INTEGER)")
        .execute(&writer)
        .await
        .unwrap();
    writer.close().await;

    // No measurement table: every query fails after its connection is acquired.
    let cfg = test_config(&format!("sqlite://{}", path.display()));
    let store = SqliteStore::connect(&cfg.store).await.unwrap();

    for _ in 0..(cfg.store.max_connections * 5) {
        assert!(matches!(store.max_date().await, Err(StoreError::Query(_))));
        assert!(matches!(
            store.aggregate_tobs(DateRange::since(day("2017-01-01"))).await,
            Err(StoreError::Query(_))
        ));
    }

    // Pool still hands out connections once the failures are done.
    store.ping().await.unwrap();
}

#[tokio::test]
async fn test_closed_pool_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let store = seeded_store(&dir, true).await;
    store.pool().close().await;

    assert!(matches!(store.max_date().await, Err(StoreError::Unavailable(_))));

    let engine = QueryEngine::new(Arc::new(store));
    assert!(matches!(
        engine.stats_from("2017-01-01").await,
        Err(QueryError::StoreUnavailable(_))
    ));
}
