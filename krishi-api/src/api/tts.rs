//! Text-to-speech proxy endpoint

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use krishi_common::Lang;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::AppState;

/// Request for POST /api/tts
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: Option<String>,
    pub lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct TtsError {
    error: &'static str,
}

/// POST /api/tts
///
/// Synthesizes the text and streams back MP3 audio. When no language is
/// given the script of the text picks one (Devanagari maps to Marathi,
/// anything else to English).
pub async fn synthesize_speech(
    State(state): State<AppState>,
    Json(req): Json<TtsRequest>,
) -> Response {
    let text = req.text.unwrap_or_default();
    let lang = match req.lang.as_deref() {
        Some(code) => Lang::from_code(code),
        None => Lang::detect_hint(&text, Lang::En),
    };

    match state.tts.synthesize(&text, lang).await {
        Ok(audio) => ([(header::CONTENT_TYPE, "audio/mpeg")], audio).into_response(),
        Err(e) => {
            error!("TTS synthesis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(TtsError {
                    error: "tts_failed",
                }),
            )
                .into_response()
        }
    }
}
