//! Readiness check.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_root))
}

/// GET / — static acknowledgment once the classifier is loaded.
async fn get_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "urgency-triage",
    }))
}
