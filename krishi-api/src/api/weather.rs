//! Weather proxy endpoint

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::services::{Location, WeatherClient, WeatherSummary};
use crate::AppState;

/// Query parameters for GET /api/weather
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub city: Option<String>,
}

/// Successful weather response
#[derive(Debug, Serialize)]
pub struct WeatherResponse {
    /// Present (true) only when serving fixed data because no API key is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stub: Option<bool>,
    pub weather: WeatherSummary,
}

#[derive(Debug, Serialize)]
struct WeatherError {
    error: &'static str,
}

/// GET /api/weather
///
/// Proxies OpenWeather current conditions by coordinates or city name.
/// Without an API key the stub summary is returned for any query; with a
/// key a missing location is a 400.
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Response {
    if !state.weather.has_key() {
        return Json(WeatherResponse {
            stub: Some(true),
            weather: WeatherClient::stub_summary(),
        })
        .into_response();
    }

    let Some(location) = Location::from_parts(query.lat, query.lon, query.city) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(WeatherError {
                error: "missing_location",
            }),
        )
            .into_response();
    };

    match state.weather.current(&location).await {
        Ok(weather) => Json(WeatherResponse {
            stub: None,
            weather,
        })
        .into_response(),
        Err(e) => {
            error!("Weather lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(WeatherError {
                    error: "weather_error",
                }),
            )
                .into_response()
        }
    }
}
