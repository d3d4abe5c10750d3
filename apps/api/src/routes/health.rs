use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports service version, live interactions and which collaborators are configured.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "prepcoach-api",
        "active_interactions": state.sessions.active_interactions(),
        "pipeline": if state.pipeline.is_some() { "ready" } else { "unavailable" },
        "job_listings": if state.jobs.is_some() { "ready" } else { "unavailable" },
    }))
}
