use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::query::QueryEngine;
use crate::store::{ObservationStore, SqliteStore};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub engine: Arc<QueryEngine>,
}

impl AppState {
    /// Open the configured SQLite store and build the query engine over it
    pub async fn new(cfg: Config) -> Result<Self> {
        let store = SqliteStore::connect(&cfg.store).await?;
        store.ping().await?;
        Ok(Self::with_store(cfg, Arc::new(store)))
    }

    pub fn with_store(cfg: Config, store: Arc<dyn ObservationStore>) -> Self {
        Self {
            cfg,
            engine: Arc::new(QueryEngine::new(store)),
        }
    }
}
