pub mod error;
pub mod health;
pub mod v1;

use axum::{http::Method, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::app::AppState;

const INDEX: &str = "\
Station climate API

Available routes:
  /api/v1.0/precipitation       precipitation for the year before the last recorded date
  /api/v1.0/stations            observing stations
  /api/v1.0/tobs                observed temperature for the year before the last recorded date
  /api/v1.0/<start>             min, avg and max temperature from <start> onward
  /api/v1.0/<start>/<end>       min, avg and max temperature between <start> and <end>, inclusive

Dates use the YYYY-MM-DD format.
";

pub fn router(state: AppState) -> Router {
    let enable_cors = state.cfg.server.enable_cors;

    let mut router = Router::new()
        .route("/", get(index))
        .route("/healthz", get(health::liveness_check))
        .route("/health", get(health::health_check))
        .with_state(state.clone())
        .nest("/api/v1.0", v1::router(state));

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([Method::GET]);
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http())
}

pub async fn index() -> &'static str {
    INDEX
}
