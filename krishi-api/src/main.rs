//! krishi-api - Agricultural advisory backend
//!
//! Serves crop, fertilizer and irrigation advice, proxies weather and
//! text-to-speech, and classifies uploaded leaf photos with a
//! deterministic color heuristic.

use anyhow::Result;
use krishi_api::{build_router, AppState};
use krishi_common::ServiceConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting KrishiMitra advisory backend (krishi-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = ServiceConfig::load();
    if config.openweather_api_key.is_some() {
        info!("✓ OpenWeather API key configured");
    } else {
        info!("No OpenWeather API key (weather routes serve stub data)");
    }

    let state = AppState::new(config.openweather_api_key.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!("krishi-api listening on http://{}", config.bind_addr());
    info!("Health check: http://{}/health", config.bind_addr());

    axum::serve(listener, app).await?;

    Ok(())
}
