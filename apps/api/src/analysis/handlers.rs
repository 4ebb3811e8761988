//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use ats_core::advice::{expert_advice, suggest_bullets, BulletSuggestion, ExpertInsight};
use ats_core::clusters::{rank_clusters, ClusterFit};
use ats_core::{ComparisonReport, HealthReport};

use crate::errors::AppError;
use crate::state::AppState;

/// Clusters returned when the caller does not ask for a specific number.
const DEFAULT_CLUSTER_LIMIT: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub jd_text: String,
}

#[derive(Debug, Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ClustersRequest {
    #[serde(default)]
    pub resume_text: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ClustersResponse {
    pub clusters: Vec<ClusterFit>,
}

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: Option<ExpertInsight>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub missing_keywords: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<BulletSuggestion>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats/keywords
pub async fn handle_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Json<KeywordsResponse> {
    let keywords = state.engine.extract_keywords(&request.text);
    debug!("Extracted {} keywords", keywords.len());

    Json(KeywordsResponse {
        keywords: keywords.to_vec(),
        backend: state.engine.backend_name(),
    })
}

/// POST /api/v1/ats/compare
///
/// Empty texts are not an error: they score 0 with empty keyword lists.
pub async fn handle_compare(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Json<ComparisonReport> {
    let report = state.engine.compare(&request.resume_text, &request.jd_text);
    debug!(
        "Compared resume against JD: score {} ({} missing)",
        report.match_score,
        report.missing_keywords.len()
    );
    Json(report)
}

/// POST /api/v1/ats/audit
pub async fn handle_audit(
    State(state): State<AppState>,
    Json(request): Json<AuditRequest>,
) -> Json<HealthReport> {
    Json(state.engine.audit_resume(&request.resume_text))
}

/// POST /api/v1/ats/clusters
///
/// Top career clusters by keyword overlap (default 3).
pub async fn handle_clusters(
    Json(request): Json<ClustersRequest>,
) -> Result<Json<ClustersResponse>, AppError> {
    let limit = request.limit.unwrap_or(DEFAULT_CLUSTER_LIMIT);
    if limit == 0 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }

    let clusters = rank_clusters(&request.resume_text)
        .into_iter()
        .take(limit)
        .collect();

    Ok(Json(ClustersResponse { clusters }))
}

/// POST /api/v1/ats/advice
pub async fn handle_advice(Json(request): Json<AdviceRequest>) -> Json<AdviceResponse> {
    Json(AdviceResponse {
        advice: expert_advice(&request.job_title),
    })
}

/// POST /api/v1/ats/suggestions
///
/// Draft bullets for keywords a compare call reported as missing.
pub async fn handle_suggestions(
    Json(request): Json<SuggestionsRequest>,
) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: suggest_bullets(&request.missing_keywords),
    })
}
