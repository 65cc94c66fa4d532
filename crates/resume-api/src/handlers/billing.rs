//! Billing handlers
//!
//! Endpoint for opening the billing provider's customer portal.

use axum::{extract::State, Json};
use resume_service::dto::PortalSessionResponse;
use resume_service::services::BillingService;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Create a customer-portal session
///
/// POST /api/v1/billing/portal
pub async fn create_portal_session(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PortalSessionResponse>> {
    let service = BillingService::new(state.service_context());
    let response = service.create_portal_session(&auth.external_id).await?;
    Ok(Json(response))
}
