pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::authoring::handlers as authoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/ats/keywords", post(analysis::handle_keywords))
        .route("/api/v1/ats/compare", post(analysis::handle_compare))
        .route("/api/v1/ats/audit", post(analysis::handle_audit))
        .route("/api/v1/ats/clusters", post(analysis::handle_clusters))
        .route("/api/v1/ats/advice", post(analysis::handle_advice))
        .route("/api/v1/ats/suggestions", post(analysis::handle_suggestions))
        .route("/api/v1/ats/translate", post(authoring::handle_translate))
        // Authoring API
        .route("/api/v1/resumes/parse", post(authoring::handle_parse))
        .route("/api/v1/resumes/assemble", post(authoring::handle_assemble))
        .with_state(state)
}
