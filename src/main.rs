use anyhow::Result;
use station_climate_api::{api, app::AppState, config::Config, telemetry};
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cfg = Config::load()?;
    init_tracing(&cfg.logging);

    let state = AppState::new(cfg.clone()).await?;
    let app = api::router(state);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("Server binding to 0.0.0.0 - service will be accessible from network");
    }

    info!(%addr, store = %cfg.store.url, "starting station climate API");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
