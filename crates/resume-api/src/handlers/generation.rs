//! Generation handlers
//!
//! AI-assisted drafting endpoints, gated on a paying tier by the service.

use axum::{extract::State, Json};
use resume_service::dto::{
    GenerateSummaryRequest, GenerateWorkExperienceRequest, GeneratedWorkExperienceResponse,
    SummaryResponse,
};
use resume_service::services::GenerationService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Generate a professional summary from the resume's sections
///
/// POST /api/v1/generation/summary
pub async fn generate_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<GenerateSummaryRequest>,
) -> ApiResult<Json<SummaryResponse>> {
    let service = GenerationService::new(state.service_context());
    let response = service.generate_summary(&auth.external_id, request).await?;
    Ok(Json(response))
}

/// Generate a structured work-experience entry from a free-text description
///
/// POST /api/v1/generation/work-experience
pub async fn generate_work_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<GenerateWorkExperienceRequest>,
) -> ApiResult<Json<GeneratedWorkExperienceResponse>> {
    let service = GenerationService::new(state.service_context());
    let response = service
        .generate_work_experience(&auth.external_id, request)
        .await?;
    Ok(Json(response))
}
