use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the active keyword backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let lexicon = if state.config.lexicon_path.is_some() {
        "custom"
    } else {
        "built-in"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "ats-api",
        "keyword_backend": state.engine.backend_name(),
        "lexicon": lexicon
    }))
}
