//! Resume handlers
//!
//! CRUD endpoints over the caller's resumes.

use axum::{
    extract::{Path, State},
    Json,
};
use resume_service::dto::{CreateResumeRequest, ResumeResponse, UpdateResumeRequest};
use resume_service::services::ResumeService;
use uuid::Uuid;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List the caller's resumes
///
/// GET /api/v1/resumes
pub async fn list_resumes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ResumeResponse>>> {
    let service = ResumeService::new(state.service_context());
    let resumes = service.list_resumes(&auth.external_id).await?;
    Ok(Json(resumes))
}

/// Get one resume
///
/// GET /api/v1/resumes/{resume_id}
pub async fn get_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(resume_id): Path<String>,
) -> ApiResult<Json<ResumeResponse>> {
    let resume_id = parse_resume_id(&resume_id)?;
    let service = ResumeService::new(state.service_context());
    let response = service.get_resume(&auth.external_id, resume_id).await?;
    Ok(Json(response))
}

/// Create a resume
///
/// POST /api/v1/resumes
pub async fn create_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateResumeRequest>,
) -> ApiResult<Created<Json<ResumeResponse>>> {
    let service = ResumeService::new(state.service_context());
    let response = service.create_resume(&auth.external_id, request).await?;
    Ok(Created(Json(response)))
}

/// Replace a resume's content with the submitted editor state
///
/// PUT /api/v1/resumes/{resume_id}
pub async fn update_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(resume_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateResumeRequest>,
) -> ApiResult<Json<ResumeResponse>> {
    let resume_id = parse_resume_id(&resume_id)?;
    let service = ResumeService::new(state.service_context());
    let response = service
        .update_resume(&auth.external_id, resume_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete a resume
///
/// DELETE /api/v1/resumes/{resume_id}
pub async fn delete_resume(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(resume_id): Path<String>,
) -> ApiResult<NoContent> {
    let resume_id = parse_resume_id(&resume_id)?;
    let service = ResumeService::new(state.service_context());
    service.delete_resume(&auth.external_id, resume_id).await?;
    Ok(NoContent)
}

fn parse_resume_id(raw: &str) -> ApiResult<Uuid> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path("Invalid resume_id format"))
}
