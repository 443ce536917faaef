// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use air_footprint::application::air_quality_service::AirQualityService;
use air_footprint::application::food_log_service::FoodLogService;
use air_footprint::application::tracking_service::TrackingService;
use air_footprint::infrastructure::config::load_app_config;
use air_footprint::infrastructure::memory_repository::MemoryRepository;
use air_footprint::infrastructure::waqi_source::WaqiStationSource;
use air_footprint::presentation::app_state::AppState;
use air_footprint::presentation::handlers::{
    delete_session, food_log, footprint, get_session, health_check, history, log_food,
    nearest_stations, post_fix, reset_session,
};
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_app_config()?;
    if config.waqi.token.is_empty() {
        tracing::warn!("No WAQI token configured; station lookups will fail");
    }

    // Infrastructure
    let source = Arc::new(WaqiStationSource::new(
        config.waqi.host,
        config.waqi.token,
        config.waqi.bounds_padding_deg,
    ));
    let repository = Arc::new(MemoryRepository::new());

    // Application services
    let state = Arc::new(AppState {
        air_quality_service: AirQualityService::new(source, repository.clone()),
        tracking_service: TrackingService::new(),
        food_log_service: FoodLogService::new(repository),
        default_k: config.matching.default_k,
    });

    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/stations/nearest", get(nearest_stations))
        .route("/sessions/:id", get(get_session).delete(delete_session))
        .route("/sessions/:id/fixes", post(post_fix))
        .route("/sessions/:id/reset", post(reset_session))
        .route("/footprint", post(footprint))
        .route("/users/:user/history", get(history))
        .route("/users/:user/food", get(food_log).post(log_food))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config
        .server
        .addr
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server.addr))?;
    tracing::info!("Starting air-footprint service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
