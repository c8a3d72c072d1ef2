//! Chatbot API endpoints
//!
//! The chat route always answers 200 with a text payload: the response
//! policy never surfaces provider failures. The remaining routes are
//! compatibility stubs the frontend polls.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use super::ApiState;

/// Build chatbot router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/chatbot/chatting", get(chatting))
        .route("/match", get(match_probe))
        .route(
            "/conversation-room/last-conversation-time",
            get(last_conversation_time),
        )
        .with_state(state)
}

/// Chat request parameters
#[derive(Debug, Deserialize)]
pub struct ChatParams {
    /// Free-form user text; may be empty
    pub contents: String,
}

/// Chat response envelope
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Get a chatbot response for the supplied text
async fn chatting(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<ChatParams>,
) -> Json<ChatResponse> {
    tracing::info!(contents = %params.contents, "chat request");

    let response = state.policy.respond(&params.contents).await;

    Json(ChatResponse { response })
}

#[derive(Serialize)]
struct MatchResponse {
    status: &'static str,
    message: &'static str,
}

/// Frontend compatibility probe
async fn match_probe() -> Json<MatchResponse> {
    Json(MatchResponse {
        status: "success",
        message: "Match API is working",
    })
}

#[derive(Serialize)]
struct LastConversationTime {
    status: &'static str,
    last_time: &'static str,
}

/// Frontend compatibility stub; the gateway keeps no conversation state
async fn last_conversation_time() -> Json<LastConversationTime> {
    Json(LastConversationTime {
        status: "success",
        last_time: "2025-05-24T09:00:00",
    })
}
