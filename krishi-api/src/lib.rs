//! krishi-api library - agricultural advisory backend
//!
//! Routes:
//! - POST /api/disease/detect - leaf photo classification (the heuristic
//!   pipeline in [`leafscan`]) joined with the advisory message table
//! - POST /api/crop/recommend, /api/soil/fertilizer,
//!   /api/irrigation/advice - rule-table lookups in [`advisor`]
//! - GET /api/weather, POST /api/tts - third-party proxies in [`services`]
//! - GET /health - health check

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod advisor;
pub mod api;
pub mod leafscan;
pub mod services;

use leafscan::HeuristicConfig;
use services::{TtsClient, WeatherClient};

/// Upload size cap for the disease-detection route (2 MB, enough for a
/// phone photo after client-side downscaling)
pub const UPLOAD_LIMIT_BYTES: usize = 2 * 1024 * 1024;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// OpenWeather proxy client (stub mode when no API key is configured)
    pub weather: WeatherClient,
    /// Google Translate TTS proxy client
    pub tts: TtsClient,
    /// Classifier tuning constants
    pub heuristics: HeuristicConfig,
}

impl AppState {
    /// Create application state with default classifier tuning
    pub fn new(openweather_api_key: Option<String>) -> Self {
        Self {
            weather: WeatherClient::new(openweather_api_key),
            tts: TtsClient::new(),
            heuristics: HeuristicConfig::default(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/disease/detect",
            post(api::detect_disease).layer(DefaultBodyLimit::max(UPLOAD_LIMIT_BYTES)),
        )
        .route("/api/crop/recommend", post(api::recommend))
        .route("/api/soil/fertilizer", post(api::fertilizer))
        .route("/api/irrigation/advice", post(api::advise))
        .route("/api/weather", get(api::current_weather))
        .route("/api/tts", post(api::synthesize_speech))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
