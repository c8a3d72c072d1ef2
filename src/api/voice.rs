//! TTS API endpoints

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};

use super::ApiState;

/// Build TTS router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/openai", get(synthesize_openai))
        .with_state(state)
}

/// Synthesis request parameters
#[derive(Debug, Deserialize)]
pub struct TtsParams {
    pub contents: String,
}

/// Synthesize text to speech
///
/// Returns audio in MP3 format
async fn synthesize_openai(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<TtsParams>,
) -> Result<Response, VoiceError> {
    let tts = state.tts.as_ref().ok_or(VoiceError::NotConfigured(
        "TTS not configured (no OpenAI API key)",
    ))?;

    if params.contents.is_empty() {
        return Err(VoiceError::BadRequest("Empty text"));
    }

    tracing::info!(contents = %params.contents, "tts request");

    let audio = tts
        .synthesize(&params.contents)
        .await
        .map_err(|e| VoiceError::SynthesisFailed(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "audio/mpeg")],
        audio,
    )
        .into_response())
}

/// Voice API errors
#[derive(Debug)]
pub enum VoiceError {
    NotConfigured(&'static str),
    BadRequest(&'static str),
    SynthesisFailed(String),
}

impl IntoResponse for VoiceError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: ErrorBody,
        }

        #[derive(Serialize)]
        struct ErrorBody {
            code: &'static str,
            message: String,
        }

        let (status, code, message) = match self {
            Self::NotConfigured(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "not_configured",
                msg.to_string(),
            ),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.to_string()),
            Self::SynthesisFailed(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "synthesis_failed", msg)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: ErrorBody { code, message },
            }),
        )
            .into_response()
    }
}
