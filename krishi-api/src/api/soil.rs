//! Fertilizer advice endpoint

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::advisor::{fertilizer_advice, SoilReading};

/// Request for POST /api/soil/fertilizer
///
/// Field names mirror how soil test reports are written (pH, N, P, K).
#[derive(Debug, Deserialize)]
pub struct FertilizerRequest {
    #[serde(rename = "pH", default = "default_ph")]
    pub ph: f64,
    #[serde(default = "default_moisture")]
    pub moisture: f64,
    #[serde(rename = "N", default = "default_nitrogen")]
    pub nitrogen: f64,
    #[serde(rename = "P", default = "default_phosphorus")]
    pub phosphorus: f64,
    #[serde(rename = "K", default = "default_potassium")]
    pub potassium: f64,
}

fn default_ph() -> f64 {
    7.0
}
fn default_moisture() -> f64 {
    30.0
}
fn default_nitrogen() -> f64 {
    150.0
}
fn default_phosphorus() -> f64 {
    15.0
}
fn default_potassium() -> f64 {
    120.0
}

/// Response for POST /api/soil/fertilizer
#[derive(Debug, Serialize)]
pub struct FertilizerResponse {
    pub recommendations: Vec<&'static str>,
}

/// POST /api/soil/fertilizer
pub async fn fertilizer(Json(req): Json<FertilizerRequest>) -> Json<FertilizerResponse> {
    let reading = SoilReading {
        ph: req.ph,
        moisture: req.moisture,
        nitrogen: req.nitrogen,
        phosphorus: req.phosphorus,
        potassium: req.potassium,
    };
    Json(FertilizerResponse {
        recommendations: fertilizer_advice(&reading),
    })
}
