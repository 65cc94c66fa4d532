//! Subscription handlers
//!
//! Endpoint for reading the caller's feature tier.

use axum::{extract::State, Json};
use resume_service::dto::SubscriptionLevelResponse;
use resume_service::services::SubscriptionService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the caller's subscription level
///
/// GET /api/v1/subscription/level
pub async fn get_level(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<SubscriptionLevelResponse>> {
    let service = SubscriptionService::new(state.service_context());
    let response = service.get_level(&auth.external_id).await?;
    Ok(Json(response))
}
