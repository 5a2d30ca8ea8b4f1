//! Classification route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::error;
use triage_core::Error;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/classify", post(classify))
}

#[derive(Deserialize)]
struct ClassifyRequest {
    #[serde(default)]
    text: Option<String>,
}

/// POST /classify — `{"text": "..."}` → `{"urgency": "High"|"Medium"|"Low"}`.
async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> impl IntoResponse {
    let text = req.text.unwrap_or_default();

    match state.classifier.classify(&text) {
        Ok(label) => (
            StatusCode::OK,
            Json(serde_json::json!({ "urgency": label })),
        ),
        Err(Error::InvalidInput(_)) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "Text is required" })),
        ),
        Err(e) => {
            error!("Classification failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
        }
    }
}
