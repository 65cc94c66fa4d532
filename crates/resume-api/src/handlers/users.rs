//! User handlers
//!
//! Endpoints for reading the current user's profile and the public user
//! count.

use axum::{extract::State, Json};
use resume_service::dto::{CurrentUserResponse, UserCountResponse};
use resume_service::services::UserService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /api/v1/users/me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(&auth.external_id).await?;
    Ok(Json(response))
}

/// Get total registered users (public)
///
/// GET /api/v1/users/count
pub async fn get_user_count(
    State(state): State<AppState>,
) -> ApiResult<Json<UserCountResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user_count().await?;
    Ok(Json(response))
}
