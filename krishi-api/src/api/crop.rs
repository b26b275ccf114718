//! Crop recommendation endpoint

use axum::Json;
use krishi_common::Lang;
use serde::{Deserialize, Serialize};

use crate::advisor::{crop_message, recommend_crops, AreaUnit, SoilType};

/// Request for POST /api/crop/recommend
#[derive(Debug, Deserialize)]
pub struct CropRecommendRequest {
    #[serde(rename = "landArea", default = "default_land_area")]
    pub land_area: f64,
    #[serde(default)]
    pub unit: AreaUnit,
    #[serde(rename = "soilType", default)]
    pub soil_type: SoilType,
    #[serde(default)]
    pub language: Lang,
}

fn default_land_area() -> f64 {
    1.0
}

/// Response for POST /api/crop/recommend
#[derive(Debug, Serialize)]
pub struct CropRecommendResponse {
    pub crops: Vec<&'static str>,
    pub message: String,
}

/// POST /api/crop/recommend
pub async fn recommend(Json(req): Json<CropRecommendRequest>) -> Json<CropRecommendResponse> {
    let crops = recommend_crops(req.land_area, req.unit, req.soil_type);
    let message = crop_message(req.language, req.land_area, req.unit, req.soil_type, &crops);
    Json(CropRecommendResponse { crops, message })
}
