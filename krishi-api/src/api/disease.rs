//! Leaf disease detection endpoint
//!
//! Accepts a multipart photo upload, runs the classifier pipeline, and
//! joins the advisory message table. Any internal failure degrades to the
//! "unknown" result instead of a request-level error: a bad photo must
//! still produce a structured answer for the farmer.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use krishi_common::Lang;
use serde::Serialize;
use tracing::{debug, warn};

use crate::advisor::{disease_advice, unknown_advice};
use crate::leafscan::{self, ClassificationResult, ColorRatios};
use crate::AppState;

/// Wire label used for the degraded outcome
const UNKNOWN_LABEL: &str = "unknown";

/// Why classification degraded, as reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// Request carried no image field (or an empty one)
    NoImage,
    /// Decode or analysis failed on the supplied image
    AnalysisFailed,
}

impl DegradeReason {
    fn as_str(&self) -> &'static str {
        match self {
            DegradeReason::NoImage => "no_image",
            DegradeReason::AnalysisFailed => "analysis_failed",
        }
    }
}

/// Response for POST /api/disease/detect
#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub label: &'static str,
    pub confidence: f64,
    pub advice: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ColorRatios>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl DetectResponse {
    fn classified(result: ClassificationResult, lang: Lang) -> Self {
        DetectResponse {
            label: result.label.as_str(),
            confidence: result.confidence,
            advice: disease_advice(result.label, lang),
            metrics: Some(result.metrics),
            error: None,
        }
    }

    fn degraded(reason: DegradeReason, lang: Lang) -> Self {
        DetectResponse {
            label: UNKNOWN_LABEL,
            confidence: 0.0,
            advice: unknown_advice(lang),
            metrics: None,
            error: Some(reason.as_str()),
        }
    }
}

/// POST /api/disease/detect
///
/// Multipart fields: `image` (required photo bytes), `language` (optional
/// `en`/`hi`/`mr`, default `en`). The language only selects advisory text;
/// classification itself is language-independent.
pub async fn detect_disease(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<DetectResponse> {
    let mut image_bytes: Option<Bytes> = None;
    let mut language = Lang::En;

    while let Ok(Some(field)) = multipart.next_field().await {
        // name() borrows the field; detach it before consuming the body
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("image") => match field.bytes().await {
                Ok(bytes) => image_bytes = Some(bytes),
                Err(e) => warn!("Failed to read image field: {}", e),
            },
            Some("language") => {
                if let Ok(text) = field.text().await {
                    language = Lang::from_code(text.trim());
                }
            }
            _ => {}
        }
    }

    let Some(bytes) = image_bytes.filter(|b| !b.is_empty()) else {
        debug!("Disease detection request without an image");
        return Json(DetectResponse::degraded(DegradeReason::NoImage, language));
    };

    match leafscan::analyze(&bytes, &state.heuristics) {
        Ok(result) => {
            debug!(
                label = result.label.as_str(),
                confidence = result.confidence,
                "Leaf classified"
            );
            Json(DetectResponse::classified(result, language))
        }
        Err(e) => {
            warn!("Leaf analysis failed: {}", e);
            Json(DetectResponse::degraded(
                DegradeReason::AnalysisFailed,
                language,
            ))
        }
    }
}
