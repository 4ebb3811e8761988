//! Axum route handlers for the authoring API.

use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use ats_core::fragments::{AssembledResume, FragmentLibrary};
use ats_core::sections::{parse_resume, ParsedResume};
use ats_core::translator::{translate, Translation};

use crate::errors::AppError;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub parsed: ParsedResume,
    /// The parsed resume rendered back to plain text.
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AssembleRequest {
    pub library: FragmentLibrary,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct AssembleResponse {
    pub resume: AssembledResume,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub industry: String,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(Json(request): Json<ParseRequest>) -> Json<ParseResponse> {
    let parsed = parse_resume(&request.text);
    let text = parsed.to_text();
    Json(ParseResponse { parsed, text })
}

/// POST /api/v1/resumes/assemble
///
/// Builds a role-targeted resume from the supplied fragment library.
pub async fn handle_assemble(
    Json(request): Json<AssembleRequest>,
) -> Result<Json<AssembleResponse>, AppError> {
    let role = request.role.trim();
    if role.is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let resume = request.library.assemble(role)?;
    info!(
        "Assembled {} resume: {} bullets, {} skills",
        role,
        resume.bullets.len(),
        resume.skills.len()
    );
    let text = resume.to_text();

    Ok(Json(AssembleResponse { resume, text }))
}

/// POST /api/v1/ats/translate
pub async fn handle_translate(
    Json(request): Json<TranslateRequest>,
) -> Result<Json<Translation>, AppError> {
    if request.industry.trim().is_empty() {
        return Err(AppError::Validation("industry cannot be empty".to_string()));
    }
    Ok(Json(translate(&request.text, &request.industry)?))
}
