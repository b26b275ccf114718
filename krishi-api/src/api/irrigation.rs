//! Irrigation advice endpoint

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::advisor::{irrigation_advice, IrrigationAdvice};
use crate::services::Location;
use crate::AppState;

/// Request for POST /api/irrigation/advice
#[derive(Debug, Deserialize)]
pub struct IrrigationRequest {
    #[serde(default = "default_moisture")]
    pub moisture: f64,
    pub city: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

fn default_moisture() -> f64 {
    30.0
}

/// Response for POST /api/irrigation/advice
#[derive(Debug, Serialize)]
pub struct IrrigationResponse {
    pub advice: IrrigationAdvice,
}

/// POST /api/irrigation/advice
///
/// Moisture thresholds decide the pump action; when a location and API key
/// are available the next-24h rain forecast can override with a hold.
/// Forecast lookups that fail are ignored.
pub async fn advise(
    State(state): State<AppState>,
    Json(req): Json<IrrigationRequest>,
) -> Json<IrrigationResponse> {
    let location = Location::from_parts(req.lat, req.lon, req.city);

    let forecast_rain = match location {
        Some(ref loc) if state.weather.has_key() => state.weather.forecast_rain(loc).await,
        _ => false,
    };

    Json(IrrigationResponse {
        advice: irrigation_advice(req.moisture, forecast_rain),
    })
}
